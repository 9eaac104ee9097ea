//! Plain-text plan summary

use crate::io::IoError;
use crate::pivot::PivotKind;
use crate::plan::Plan;

impl Plan {
    /// Summarize the plan as text: one specification row per pivot, the
    /// total irrigated area, and a tower breakdown for every pivot that
    /// has towers.
    ///
    /// `generated_on` is stamped into the header; taking the date as an
    /// argument keeps the output reproducible.
    ///
    /// Fails with [`IoError::NothingToExport`] when no pivots have been
    /// placed.
    pub fn plan_report(&self, generated_on: &str) -> Result<String, IoError> {
        if self.is_empty() {
            return Err(IoError::NothingToExport);
        }

        let mut report = String::new();
        report.push_str("Center Pivot Irrigation Plan\n");
        report.push_str(&format!("Generated: {}\n\n", generated_on));

        report.push_str("Pivot Specifications\n\n");
        report.push_str(&format!(
            "{:<20}  {:<11}  {:>10}  {:>9}  {:>6}  {:>16}  {:>10}\n",
            "Pivot", "Type", "Radius (m)", "Area (ha)", "Towers", "Flow Rate (m³/h)", "Power (kW)"
        ));
        report.push_str(&format!("{}\n", "-".repeat(94)));
        for pivot in self.pivots() {
            let kind_name = match pivot.kind() {
                PivotKind::FullCircle => "Full Circle",
                PivotKind::SemiCircle { .. } => "Semi-Circle",
            };
            let towers = match pivot.towers() {
                Some(config) => config.count().to_string(),
                None => "-".to_string(),
            };
            let flow_rate = if pivot.specification.flow_rate > 0.0 {
                pivot.specification.flow_rate.to_string()
            } else {
                "-".to_string()
            };
            let power = if pivot.specification.power > 0.0 {
                pivot.specification.power.to_string()
            } else {
                "-".to_string()
            };
            report.push_str(&format!(
                "{:<20}  {:<11}  {:>10.0}  {:>9.2}  {:>6}  {:>16}  {:>10}\n",
                pivot.specification.label,
                kind_name,
                pivot.radius(),
                pivot.area_hectares(),
                towers,
                flow_rate,
                power
            ));
        }
        report.push_str(&format!(
            "\nTotal Irrigated Area: {:.2} hectares\n",
            self.total_area_hectares()
        ));

        let mut tower_section = String::new();
        for pivot in self.pivots() {
            let Some(sectors) = pivot.tower_sectors() else {
                continue;
            };
            if sectors.is_empty() {
                continue;
            }
            tower_section.push_str(&format!("{}:\n", pivot.specification.label));
            tower_section.push_str("  ");
            for (index, sector) in sectors.iter().enumerate() {
                if index > 0 {
                    tower_section.push_str(", ");
                }
                tower_section.push_str(&format!("T{} ({:.1}m)", sector.number, sector.spacing_m));
            }
            tower_section.push('\n');
        }
        if !tower_section.is_empty() {
            report.push_str("\nTower Configuration\n\n");
            report.push_str(&tower_section);
        }

        Ok(report)
    }
}
