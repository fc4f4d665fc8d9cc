//! Chat server integration.
//!
//! A host hands every raw chat line to [`ChatFilter::on_raw_chat`]. The
//! filter rolls its gate and either returns a replacement line or `None`,
//! in which case the host keeps the original.

use tracing::debug;

use crate::config::AolerConfig;
use crate::dice::Dice;
use crate::error::AolerError;
use crate::lexicon::Lexicon;
use crate::transform::Transformer;

/// Decides whether a line is rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvocationGate {
    percent: u8,
}

impl InvocationGate {
    /// Creates a gate that opens for `percent` percent of lines.
    pub fn new(percent: u8) -> Result<Self, AolerError> {
        if percent > 100 {
            return Err(AolerError::InvalidGatePercent(percent));
        }
        Ok(Self { percent })
    }

    /// Percentage of lines the gate lets through.
    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// Rolls the gate.
    pub fn roll<D: Dice + ?Sized>(&self, dice: &mut D) -> bool {
        dice.chance(self.percent)
    }
}

/// Rewrites a share of incoming chat lines.
#[derive(Debug, Clone, Copy)]
pub struct ChatFilter<'l> {
    transformer: Transformer<'l>,
    gate: InvocationGate,
}

impl ChatFilter<'static> {
    /// Builds a filter over the shared lexicon from a config.
    pub fn from_config(config: &AolerConfig) -> Result<Self, AolerError> {
        let gate = InvocationGate::new(config.gate_percent)?;
        Ok(Self::new(Lexicon::shared(), gate))
    }
}

impl<'l> ChatFilter<'l> {
    /// Creates a filter over `lexicon` guarded by `gate`.
    pub fn new(lexicon: &'l Lexicon, gate: InvocationGate) -> Self {
        Self {
            transformer: Transformer::new(lexicon),
            gate,
        }
    }

    /// The gate this filter rolls per line.
    pub fn gate(&self) -> InvocationGate {
        self.gate
    }

    /// Handles one raw chat line.
    ///
    /// Returns the replacement text, or `None` when the gate stays closed.
    pub fn on_raw_chat<D: Dice + ?Sized>(&self, message: &str, dice: &mut D) -> Option<String> {
        if !self.gate.roll(dice) {
            debug!(percent = self.gate.percent, "gate closed, line passed through");
            return None;
        }
        Some(self.transformer.transform(message, dice))
    }
}
