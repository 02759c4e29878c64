//! Fixture definitions
//!
//! A fixture bundles the panel layout, the pattern tables and regions its
//! effects address, and its light settings. Tables are asserted at compile
//! time inside each fixture module; [`FixtureConfig::validate`] repeats the
//! checks at startup so a hand-built fixture cannot skip them.

pub mod deltohedron;
pub mod flower;

use crate::{
    bounds::RegionBounds,
    config::LightConfig,
    error::ConfigurationError,
    geometry::{PanelLayout, PatternTable},
};

#[derive(Debug, Clone, Copy)]
pub struct FixtureConfig {
    pub name: &'static str,
    pub layout: PanelLayout,
    /// Panel-relative tables used by the fixture's effects
    pub tables: &'static [PatternTable],
    /// Chain-absolute regions used by the fixture's effects
    pub regions: &'static [RegionBounds],
    pub light: LightConfig,
}

impl FixtureConfig {
    pub const fn validate(&self) -> Result<(), ConfigurationError> {
        let mut i = 0;
        while i < self.tables.len() {
            if let Err(err) = self.tables[i].validate(self.layout.pixels_per_panel) {
                return Err(err);
            }
            i += 1;
        }

        let led_count = self.layout.led_count();
        let mut i = 0;
        while i < self.regions.len() {
            if let Err(err) = self.regions[i].validate(led_count) {
                return Err(err);
            }
            i += 1;
        }
        Ok(())
    }
}
