//! Line-based console driver.
//!
//! [`Console`] owns an input and an output stream and threads a
//! [`GameState`] through a fixed number of rounds. It works over any
//! [`BufRead`] and [`Write`], so a whole game can be scripted.

use std::io::{BufRead, Write};

use rand::Rng;
use tracing::{debug, info, info_span};

use crate::error::ConsoleError;
use crate::game::{GameState, Phase};
use crate::options::TableOptions;
use crate::result::Settlement;

/// A console session: prompts on `output`, answers read from `input`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a session over the given streams.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the session and returns the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays `options.rounds` hands and returns the final state.
    ///
    /// The shoe is reshuffled before every hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the streams fail, the input ends early, or a
    /// transition reports a broken invariant.
    pub fn play<G: Rng + ?Sized>(
        &mut self,
        options: &TableOptions,
        rng: &mut G,
    ) -> Result<GameState, ConsoleError> {
        let mut state = GameState::new(options.starting_chips);

        for round in 1..=options.rounds {
            let _span = info_span!("round", round).entered();
            state = self.play_hand(&state.shuffle(options.decks, rng))?;
        }

        info!(chips = state.chips, "game over");
        Ok(state)
    }

    /// Plays one hand from the shoe already in `state`: bet, deal, the
    /// player's turn, the dealer's turn and the summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the streams fail, the input ends early, or a
    /// transition reports a broken invariant.
    pub fn play_hand(&mut self, state: &GameState) -> Result<GameState, ConsoleError> {
        writeln!(
            self.output,
            "Place your bet! Current Balance is {}",
            state.chips
        )?;
        let state = self.take_bet(state)?;
        writeln!(self.output, "Your current bet is {}", state.bet)?;

        let mut state = state.deal()?;
        while state.phase == Phase::PlayerTurn {
            writeln!(self.output, "Player: {}", state.player)?;
            writeln!(self.output, "Dealer: {}", state.dealer.dealer_view())?;
            writeln!(self.output, "What will you do? (h)it, (s)tand")?;

            let command = self.read_line()?;
            state = match command.as_str() {
                "h" => state.hit()?,
                "s" => state.stand(),
                other => {
                    debug!(command = other, "unknown command");
                    writeln!(
                        self.output,
                        "unknown command {other}, press (h) to (h)it or (s) to (s)tand"
                    )?;
                    continue;
                }
            };
        }

        let mut state = state.play_dealer()?;
        if state.settlement.is_none() {
            state = state.end_hand()?;
        }
        if let Some(settlement) = &state.settlement {
            self.report(settlement)?;
        }

        Ok(state)
    }

    /// Reads bets until one is accepted.
    fn take_bet(&mut self, state: &GameState) -> Result<GameState, ConsoleError> {
        loop {
            let input = self.read_line()?;
            match state.place_bet(&input) {
                Ok(next) => return Ok(next),
                Err(err) => {
                    debug!(%err, input = %input, "bet rejected");
                    writeln!(self.output, "{err}")?;
                }
            }
        }
    }

    fn report(&mut self, settlement: &Settlement) -> Result<(), ConsoleError> {
        writeln!(self.output, "your bet is {}", settlement.bet)?;
        writeln!(self.output, "==FINAL HANDS==")?;
        writeln!(
            self.output,
            "Player: {}\nScore: {}",
            settlement.player_hand, settlement.player_score
        )?;
        writeln!(
            self.output,
            "Dealer: {}\nScore: {}",
            settlement.dealer_hand, settlement.dealer_score
        )?;
        writeln!(
            self.output,
            "{}, current chips {}",
            settlement.outcome, settlement.chips
        )?;
        Ok(())
    }

    /// Reads one line with surrounding whitespace removed.
    fn read_line(&mut self) -> Result<String, ConsoleError> {
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        Ok(line.trim().to_owned())
    }
}
