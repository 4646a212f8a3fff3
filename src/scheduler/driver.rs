//! The turn scheduler for autonomous seats.
//!
//! The scheduler is a resumable step machine: each `step` asks the policy
//! for one recommendation, issues the matching command, and reports what
//! happened. Callers decide the pacing; `run_turn` just steps until the
//! turn is no longer the bot's.
//!
//! A policy recommending something the engine refuses is an anomaly: the
//! engine's guards and a correct policy agree on legality, so a rejection
//! means the policy is wrong about the state. The scheduler records the
//! rejection, notes it in the match log, and abandons the turn by forcing
//! phase advances until the turn passes. The match keeps moving whatever
//! the policy does.

use std::time::Duration;

use tracing::warn;

use crate::engine::machine::MatchEngine;
use crate::engine::state::Controller;
use crate::policy::{DecisionPolicy, Recommendation};

/// Default pacing hint between steps.
const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(600);

/// Upper bound on steps within one turn before the scheduler assumes the
/// policy is stuck and abandons.
const MAX_STEPS_PER_TURN: u32 = 500;

/// What one scheduler step did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// A play or buy command succeeded.
    Acted(Recommendation),
    /// The policy passed; the phase advanced within the same turn.
    PhaseAdvanced,
    /// Cleanup ran and the turn belongs to the next seat.
    TurnComplete,
    /// An anomaly forced the turn to be abandoned.
    Abandoned,
    /// The current seat is human; the scheduler has nothing to do.
    Idle,
    /// The match is over.
    Ended,
}

impl StepOutcome {
    /// Whether the same seat's turn continues after this step.
    #[must_use]
    pub fn turn_continues(&self) -> bool {
        matches!(self, StepOutcome::Acted(_) | StepOutcome::PhaseAdvanced)
    }
}

/// Drives autonomous seats one recommendation at a time.
pub struct TurnScheduler<P: DecisionPolicy> {
    policy: P,
    step_delay: Duration,
}

impl<P: DecisionPolicy> TurnScheduler<P> {
    #[must_use]
    pub fn new(policy: P) -> Self {
        Self {
            policy,
            step_delay: DEFAULT_STEP_DELAY,
        }
    }

    /// Override the pacing hint.
    #[must_use]
    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }

    /// How long a UI should wait between steps.
    ///
    /// Purely advisory: the scheduler itself never sleeps, so tests and
    /// headless matches run at full speed.
    #[must_use]
    pub fn step_delay(&self) -> Duration {
        self.step_delay
    }

    /// Take one step for the current seat.
    pub fn step(&mut self, engine: &mut MatchEngine) -> StepOutcome {
        if engine.state().is_ended() {
            return StepOutcome::Ended;
        }
        if engine.current_controller() != Controller::Autonomous {
            return StepOutcome::Idle;
        }

        let me = engine.current_player();
        let rec = self.policy.decide(engine.state(), me);
        let result = match rec {
            Recommendation::PlayAction(card) => engine.play_action_card(me, card),
            Recommendation::PlayTreasure(card) => engine.play_treasure_card(me, card),
            Recommendation::Buy(pile) => engine.buy_card(me, pile),
            Recommendation::Pass => engine.advance_phase(me),
        };

        match result {
            Ok(()) => {
                if engine.state().is_ended() {
                    return StepOutcome::Ended;
                }
                match rec {
                    Recommendation::Pass => {
                        self.policy.phase_reset();
                        if engine.current_player() == me {
                            StepOutcome::PhaseAdvanced
                        } else {
                            StepOutcome::TurnComplete
                        }
                    }
                    _ => StepOutcome::Acted(rec),
                }
            }
            Err(err) => {
                warn!(player = %me, ?rec, %err, "Policy recommendation rejected");
                self.policy.note_rejected(rec);
                engine.record_anomaly(me, format!("{rec:?} rejected: {err}"));
                self.abandon_turn(engine)
            }
        }
    }

    /// Run the current seat's turn to completion.
    ///
    /// Returns the outcome that ended the run: `TurnComplete`, `Abandoned`,
    /// `Ended`, or `Idle` for a human seat.
    pub fn run_turn(&mut self, engine: &mut MatchEngine) -> StepOutcome {
        for _ in 0..MAX_STEPS_PER_TURN {
            let outcome = self.step(engine);
            if !outcome.turn_continues() {
                return outcome;
            }
        }

        let me = engine.current_player();
        warn!(player = %me, limit = MAX_STEPS_PER_TURN, "Turn step limit hit");
        engine.record_anomaly(me, format!("turn exceeded {MAX_STEPS_PER_TURN} steps"));
        self.abandon_turn(engine)
    }

    /// Force phase advances until the turn passes or the match ends.
    fn abandon_turn(&mut self, engine: &mut MatchEngine) -> StepOutcome {
        let me = engine.current_player();
        while !engine.state().is_ended() && engine.current_player() == me {
            if engine.advance_phase(me).is_err() {
                break;
            }
            self.policy.phase_reset();
        }
        if engine.state().is_ended() {
            StepOutcome::Ended
        } else {
            StepOutcome::Abandoned
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::catalog;
    use crate::core::log::LogEvent;
    use crate::core::phase::Phase;
    use crate::core::player::PlayerId;
    use crate::engine::machine::MatchSetup;
    use crate::engine::state::MatchState;
    use crate::policy::TieredPolicy;

    fn bots_engine(seed: u64) -> MatchEngine {
        MatchEngine::start(
            MatchSetup::new()
                .player("North", Controller::Autonomous)
                .player("South", Controller::Autonomous)
                .seed(seed),
        )
    }

    #[test]
    fn test_run_turn_hands_off_to_the_next_seat() {
        let mut engine = bots_engine(1);
        let mut scheduler = TurnScheduler::new(TieredPolicy::new());

        let outcome = scheduler.run_turn(&mut engine);

        assert_eq!(outcome, StepOutcome::TurnComplete);
        assert_eq!(engine.current_player(), PlayerId::new(1));
        assert_eq!(engine.state().phase, Phase::Action);
        assert_eq!(engine.state().players[PlayerId::new(0)].zones.hand_len(), 5);
    }

    #[test]
    fn test_step_is_idle_for_a_human_seat() {
        let mut engine = MatchEngine::start(
            MatchSetup::new()
                .player("Ada", Controller::Human)
                .player("Bot", Controller::Autonomous)
                .seed(2),
        );
        let mut scheduler = TurnScheduler::new(TieredPolicy::new());

        assert_eq!(scheduler.step(&mut engine), StepOutcome::Idle);
        assert_eq!(scheduler.run_turn(&mut engine), StepOutcome::Idle);
    }

    #[test]
    fn test_first_turn_steps_in_order() {
        let mut engine = bots_engine(3);
        let mut scheduler = TurnScheduler::new(TieredPolicy::new());

        // Opening hands hold no actions, so the bot passes straight to buy.
        assert_eq!(scheduler.step(&mut engine), StepOutcome::PhaseAdvanced);
        assert_eq!(engine.state().phase, Phase::Buy);

        // Then it plays every treasure it drew before buying.
        let mut outcome = scheduler.step(&mut engine);
        let mut treasures = 0;
        while matches!(outcome, StepOutcome::Acted(Recommendation::PlayTreasure(_))) {
            treasures += 1;
            outcome = scheduler.step(&mut engine);
        }
        assert!(treasures >= 2, "opening hand always has coppers");
        assert!(matches!(outcome, StepOutcome::Acted(Recommendation::Buy(_))));
    }

    #[test]
    fn test_anomalous_policy_abandons_the_turn() {
        struct BrokenPolicy;
        impl DecisionPolicy for BrokenPolicy {
            fn decide(&self, _state: &MatchState, _me: PlayerId) -> Recommendation {
                // No seat can afford gold on the first action phase.
                Recommendation::Buy(catalog::GOLD)
            }
            fn note_rejected(&mut self, _rec: Recommendation) {}
            fn phase_reset(&mut self) {}
        }

        let mut engine = bots_engine(4);
        let mut scheduler = TurnScheduler::new(BrokenPolicy);

        let outcome = scheduler.step(&mut engine);

        assert_eq!(outcome, StepOutcome::Abandoned);
        assert_eq!(engine.current_player(), PlayerId::new(1));
        let logged = engine
            .state()
            .log()
            .iter()
            .any(|e| matches!(e.event, LogEvent::SchedulerAnomaly { .. }));
        assert!(logged);
    }

    #[test]
    fn test_scheduler_plays_a_whole_match() {
        let mut engine = bots_engine(5);
        let mut scheduler = TurnScheduler::new(TieredPolicy::new());

        let mut turns = 0;
        while !engine.state().is_ended() && turns < 500 {
            let outcome = scheduler.run_turn(&mut engine);
            assert_ne!(outcome, StepOutcome::Idle);
            turns += 1;
        }

        assert!(engine.state().is_ended(), "bots should finish the match");
        let outcome = engine.state().outcome().unwrap();
        assert!(outcome.totals.iter().any(|(_, &vp)| vp > 0));
        assert_eq!(scheduler.step(&mut engine), StepOutcome::Ended);
    }

    #[test]
    fn test_matches_replay_identically_from_the_seed() {
        let run = |seed: u64| -> Vec<u8> {
            let mut engine = bots_engine(seed);
            let mut scheduler = TurnScheduler::new(TieredPolicy::new());
            let mut guard = 0;
            while !engine.state().is_ended() && guard < 500 {
                scheduler.run_turn(&mut engine);
                guard += 1;
            }
            engine.snapshot().to_bytes().unwrap()
        };

        assert_eq!(run(77), run(77));
    }

    #[test]
    fn test_step_delay_is_a_hint() {
        let scheduler = TurnScheduler::new(TieredPolicy::new());
        assert_eq!(scheduler.step_delay(), Duration::from_millis(600));

        let quick = TurnScheduler::new(TieredPolicy::new())
            .with_step_delay(Duration::from_millis(0));
        assert_eq!(quick.step_delay(), Duration::ZERO);
    }
}
