//! Tower layout along the pivot arm
//!
//! A pivot arm rides on wheeled towers. Each tower traces a concentric
//! wheel track, and the ground between neighboring tracks is that
//! tower's sector.

use crate::float_types::Real;

/// How tower distances along the arm are chosen.
#[derive(Debug, Clone, PartialEq)]
pub enum TowerSpacing {
    /// Towers sit every `radius / count` meters, the outermost on the
    /// rim.
    Equal,
    /// Explicit width of each sector in meters, innermost first.
    /// Distances are the running sums. Entries beyond the tower count
    /// are ignored; missing entries leave the arm short.
    Custom(Vec<Real>),
}

/// One wheeled tower along the arm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TowerSector {
    /// 1-based position counted from the center outward.
    pub number: usize,
    /// Distance from the pivot center in meters.
    pub distance_m: Real,
    /// Width of ground this tower covers, in meters.
    pub spacing_m: Real,
}

/// An applied tower configuration: the request (count and spacing rule)
/// plus the sectors derived from it at the pivot's current radius.
#[derive(Debug, Clone, PartialEq)]
pub struct TowerConfig {
    count: usize,
    spacing: TowerSpacing,
    sectors: Vec<TowerSector>,
}

impl TowerConfig {
    /// `count` must be at least 1; the caller validates.
    pub(crate) fn new(count: usize, spacing: TowerSpacing, outer_radius: Real) -> Self {
        let mut config = TowerConfig { count, spacing, sectors: Vec::new() };
        config.refresh(outer_radius);
        config
    }

    /// Recompute sectors after a radius change. Equal spacing follows
    /// the new radius; custom spacings are fixed widths and do not.
    pub(crate) fn refresh(&mut self, outer_radius: Real) {
        self.sectors = match &self.spacing {
            TowerSpacing::Equal => {
                let spacing_m = outer_radius / self.count as Real;
                (1..=self.count)
                    .map(|number| TowerSector {
                        number,
                        distance_m: number as Real * spacing_m,
                        spacing_m,
                    })
                    .collect()
            },
            TowerSpacing::Custom(spacings) => {
                let mut sectors = Vec::with_capacity(self.count.min(spacings.len()));
                let mut distance_m = 0.0;
                for (index, &spacing_m) in spacings.iter().take(self.count).enumerate() {
                    distance_m += spacing_m;
                    sectors.push(TowerSector { number: index + 1, distance_m, spacing_m });
                }
                sectors
            },
        };
    }

    /// Towers requested; may exceed the sector count when a custom
    /// spacing list comes up short.
    pub const fn count(&self) -> usize {
        self.count
    }

    pub const fn spacing(&self) -> &TowerSpacing {
        &self.spacing
    }

    pub fn sectors(&self) -> &[TowerSector] {
        &self.sectors
    }
}
