use std::collections::VecDeque;

use crate::battle::field::BattlerIndex;
use crate::battle::stats::effective_speed;
use crate::battle::state::{BattleContext, TurnCommand};
use crate::move_data::get_move;
use crate::text::BattleMessage;
use schema::{MoveId, Stat, StatusEffect};
use tracing::debug;

/// A move about to be executed by one battler.
#[derive(Debug, Clone, PartialEq)]
pub struct MovePhase {
    pub user: BattlerIndex,
    pub move_id: MoveId,
    pub targets: Vec<BattlerIndex>,
    pub ignore_pp: bool,
    /// Called by another move; `IGNORE_ABILITIES` does not carry over.
    pub follow_up: bool,
}

impl MovePhase {
    pub fn new(user: BattlerIndex, move_id: MoveId, targets: Vec<BattlerIndex>) -> Self {
        Self {
            user,
            move_id,
            targets,
            ignore_pp: false,
            follow_up: false,
        }
    }

    pub fn follow_up(mut self) -> Self {
        self.ignore_pp = true;
        self.follow_up = true;
        self
    }
}

/// Atomic units of battle execution that move effects schedule.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Message(BattleMessage),
    Move(MovePhase),
    StatStageChange {
        target: BattlerIndex,
        stats: Vec<Stat>,
        levels: i8,
    },
    Heal {
        target: BattlerIndex,
        amount: u32,
        message: Option<BattleMessage>,
    },
    ObtainStatus {
        target: BattlerIndex,
        effect: StatusEffect,
        /// Sleep duration; 0 for every other status.
        turns: u8,
        source_move: Option<MoveId>,
    },
    Switch {
        index: BattlerIndex,
        /// `None` lets the owner pick.
        party_slot: Option<usize>,
        forced: bool,
    },
    Faint {
        index: BattlerIndex,
    },
}

impl Phase {
    /// Is this the pending move of `user`?
    pub fn is_move_of(&self, user: BattlerIndex) -> bool {
        matches!(self, Phase::Move(p) if p.user == user)
    }
}

/// Ordered queue of pending phases.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhaseQueue {
    phases: VecDeque<Phase>,
    // Phases unshifted since the last `pop_front`; they keep their relative order.
    unshifted: usize,
}

// Sort key for a turn command.
#[derive(Debug, Clone, Copy)]
struct CommandPriority {
    command_priority: i8, // Run: 10, Switch: 6, Move: 0
    move_priority: i32,
    speed: u32,
}

impl PhaseQueue {
    pub fn new() -> Self {
        Self {
            phases: VecDeque::new(),
            unshifted: 0,
        }
    }

    /// Build the opening queue for a turn from the committed `turn_commands`.
    ///
    /// Runs first, then switches, then moves by priority and speed.
    pub fn build_initial(ctx: &BattleContext) -> Self {
        let mut ordered: Vec<(BattlerIndex, &TurnCommand, CommandPriority)> = ctx
            .turn_commands
            .iter()
            .filter(|(index, _)| ctx.field.is_active(**index))
            .map(|(index, command)| (*index, command, Self::command_priority(ctx, *index, command)))
            .collect();

        ordered.sort_by(|a, b| {
            b.2.command_priority
                .cmp(&a.2.command_priority)
                .then(b.2.move_priority.cmp(&a.2.move_priority))
                .then(b.2.speed.cmp(&a.2.speed))
                .then(a.0.cmp(&b.0))
        });

        let mut queue = Self::new();
        for (index, command, _) in ordered {
            match command {
                TurnCommand::Fight { move_id, targets } => {
                    queue.push_back(Phase::Move(MovePhase::new(index, *move_id, targets.clone())))
                }
                TurnCommand::Switch { party_slot } => queue.push_back(Phase::Switch {
                    index,
                    party_slot: Some(*party_slot),
                    forced: false,
                }),
                TurnCommand::Run => {}
            }
        }
        queue
    }

    fn command_priority(
        ctx: &BattleContext,
        index: BattlerIndex,
        command: &TurnCommand,
    ) -> CommandPriority {
        let speed = ctx.field.get(index).map(effective_speed).unwrap_or(0);
        match command {
            TurnCommand::Run => CommandPriority {
                command_priority: 10,
                move_priority: 0,
                speed,
            },
            TurnCommand::Switch { .. } => CommandPriority {
                command_priority: 6,
                move_priority: 0,
                speed,
            },
            TurnCommand::Fight { move_id, .. } => {
                let move_priority = match (get_move(*move_id), ctx.field.get(index)) {
                    (Ok(move_), Some(user)) => move_.get_priority(ctx, user, true),
                    _ => 0,
                };
                CommandPriority {
                    command_priority: 0,
                    move_priority,
                    speed,
                }
            }
        }
    }

    pub fn push_back(&mut self, phase: Phase) {
        debug!(?phase, "phase queued");
        self.phases.push_back(phase);
    }

    /// Run `phase` next.
    pub fn push_front(&mut self, phase: Phase) {
        debug!(?phase, "phase pushed to front");
        if self.unshifted > 0 {
            self.unshifted += 1;
        }
        self.phases.push_front(phase);
    }

    /// Run `phase` before everything already pending, but after phases
    /// unshifted earlier in the same step.
    pub fn unshift(&mut self, phase: Phase) {
        debug!(?phase, "phase unshifted");
        let index = self.unshifted.min(self.phases.len());
        self.phases.insert(index, phase);
        self.unshifted = index + 1;
    }

    /// Insert at `index`, clamped to the queue length.
    pub fn insert(&mut self, index: usize, phase: Phase) {
        let index = index.min(self.phases.len());
        if index < self.unshifted {
            self.unshifted += 1;
        }
        self.phases.insert(index, phase);
    }

    pub fn pop_front(&mut self) -> Option<Phase> {
        self.unshifted = 0;
        self.phases.pop_front()
    }

    pub fn position(&self, pred: impl Fn(&Phase) -> bool) -> Option<usize> {
        self.phases.iter().position(pred)
    }

    /// Remove and return the first phase matching `pred`.
    pub fn remove_where(&mut self, pred: impl Fn(&Phase) -> bool) -> Option<Phase> {
        let index = self.position(pred)?;
        if index < self.unshifted {
            self.unshifted -= 1;
        }
        self.phases.remove(index)
    }

    /// Move the first matching phase to the front. Returns `false` if none matched.
    pub fn move_to_front(&mut self, pred: impl Fn(&Phase) -> bool) -> bool {
        match self.remove_where(pred) {
            Some(phase) => {
                self.push_front(phase);
                true
            }
            None => false,
        }
    }

    /// Move the first matching phase behind every other phase.
    pub fn move_to_back(&mut self, pred: impl Fn(&Phase) -> bool) -> bool {
        match self.remove_where(pred) {
            Some(phase) => {
                self.phases.push_back(phase);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Phase> {
        self.phases.iter()
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }
}
