//! Report writers for the analysis output.
//!
//! The engine's contract is the in-memory [`MigrationAnalysis`]; these
//! writers are renderers over that contract and never feed back into the
//! analysis itself.

use crate::core::{ComplexityLevel, MigrationAnalysis, RiskImpact};
use clap::ValueEnum;
use colored::*;
use comfy_table::{presets, Table};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_analysis(&mut self, analysis: &MigrationAnalysis) -> anyhow::Result<()>;
}

pub fn create_writer<W: Write + 'static>(writer: W, format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_analysis(&mut self, analysis: &MigrationAnalysis) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(analysis)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_analysis(&mut self, analysis: &MigrationAnalysis) -> anyhow::Result<()> {
        self.write_header(analysis)?;
        self.write_summary(analysis)?;
        self.write_complexity(analysis)?;
        self.write_risks(analysis)?;
        self.write_dependencies(analysis)?;
        self.write_phases(analysis)?;
        self.write_rollback(analysis)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, analysis: &MigrationAnalysis) -> anyhow::Result<()> {
        writeln!(self.writer, "# Migration Analysis Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{} -> {}",
            analysis.source_stack.name, analysis.target_stack.name
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, analysis: &MigrationAnalysis) -> anyhow::Result<()> {
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        let confidence = analysis
            .source_stack
            .metadata
            .as_ref()
            .map(|m| format!("{:.0}% confidence", m.confidence))
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            self.writer,
            "| Detected stack | {} ({confidence}) |",
            analysis.source_stack.name
        )?;
        writeln!(
            self.writer,
            "| Target stack | {} |",
            analysis.target_stack.name
        )?;
        writeln!(
            self.writer,
            "| Complexity | {:.0}/100 ({:?}) |",
            analysis.complexity.score, analysis.complexity.level
        )?;
        writeln!(
            self.writer,
            "| Recommended strategy | {} |",
            analysis.recommended_strategy
        )?;
        writeln!(
            self.writer,
            "| Estimated duration | {} |",
            analysis.estimated_duration
        )?;
        writeln!(
            self.writer,
            "| Breaking changes | {} ({} automatable, ~{:.1}h) |",
            analysis.breaking_changes_summary.total,
            analysis.breaking_changes_summary.automatable_count,
            analysis.breaking_changes_summary.estimated_hours
        )?;
        writeln!(
            self.writer,
            "| Incompatible dependencies | {} of {} |",
            analysis.dependency_analysis.incompatible_count,
            analysis.dependency_analysis.total_dependencies
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_complexity(&mut self, analysis: &MigrationAnalysis) -> anyhow::Result<()> {
        writeln!(self.writer, "## Complexity Factors")?;
        writeln!(self.writer)?;
        for factor in &analysis.complexity.factors {
            writeln!(
                self.writer,
                "- **{}** (impact {:.0}/10): {}",
                factor.name, factor.impact, factor.description
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_risks(&mut self, analysis: &MigrationAnalysis) -> anyhow::Result<()> {
        writeln!(self.writer, "## Risks")?;
        writeln!(self.writer)?;
        for risk in &analysis.risks {
            writeln!(
                self.writer,
                "- [{:?}/{:?}] {} (mitigation: {})",
                risk.probability, risk.impact, risk.description, risk.mitigation
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_dependencies(&mut self, analysis: &MigrationAnalysis) -> anyhow::Result<()> {
        if analysis.dependency_analysis.incompatible.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## Incompatible Dependencies")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Package | Reason | Resolution |")?;
        writeln!(self.writer, "|---------|--------|------------|")?;
        for dep in &analysis.dependency_analysis.incompatible {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                dep.package,
                dep.reason,
                dep.resolution.as_deref().unwrap_or("-")
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_phases(&mut self, analysis: &MigrationAnalysis) -> anyhow::Result<()> {
        writeln!(self.writer, "## Migration Phases")?;
        writeln!(self.writer)?;
        for (index, phase) in analysis.suggested_phases.iter().enumerate() {
            writeln!(
                self.writer,
                "### {}. {} ({})",
                index + 1,
                phase.name,
                phase.estimated_duration
            )?;
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", phase.description)?;
            if !phase.dependencies.is_empty() {
                writeln!(
                    self.writer,
                    "- Depends on: {}",
                    phase.dependencies.join(", ")
                )?;
            }
            if phase.rollback_point {
                writeln!(self.writer, "- Rollback point")?;
            }
            for criterion in &phase.validation_criteria {
                writeln!(self.writer, "- [ ] {criterion}")?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_rollback(&mut self, analysis: &MigrationAnalysis) -> anyhow::Result<()> {
        let rollback = &analysis.rollback_strategy;
        writeln!(self.writer, "## Rollback")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Manual approval required; estimated total time {}.",
            rollback.estimated_time
        )?;
        if rollback.data_backup_required {
            writeln!(
                self.writer,
                "Database backups are required before every phase."
            )?;
        }
        writeln!(self.writer)?;
        for procedure in &rollback.procedures {
            writeln!(self.writer, "### Rollback: {}", procedure.phase)?;
            for (index, step) in procedure.steps.iter().enumerate() {
                writeln!(self.writer, "{}. {}", index + 1, step)?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn level_label(level: ComplexityLevel) -> ColoredString {
        match level {
            ComplexityLevel::Low => "low".green(),
            ComplexityLevel::Medium => "medium".yellow(),
            ComplexityLevel::High => "high".red(),
            ComplexityLevel::Critical => "critical".red().bold(),
        }
    }

    fn impact_label(impact: RiskImpact) -> ColoredString {
        match impact {
            RiskImpact::Low => "low".green(),
            RiskImpact::Medium => "medium".yellow(),
            RiskImpact::High => "high".red(),
            RiskImpact::Critical => "critical".red().bold(),
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_analysis(&mut self, analysis: &MigrationAnalysis) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Migration Analysis".bold().underline())?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "  {} -> {}",
            analysis.source_stack.name.cyan(),
            analysis.target_stack.name.cyan()
        )?;
        writeln!(
            self.writer,
            "  Complexity: {:.0}/100 ({})",
            analysis.complexity.score,
            Self::level_label(analysis.complexity.level)
        )?;
        writeln!(
            self.writer,
            "  Strategy: {}   Duration: {}",
            analysis.recommended_strategy.to_string().bold(),
            analysis.estimated_duration
        )?;
        writeln!(self.writer)?;

        if !analysis.risks.is_empty() {
            writeln!(self.writer, "{}", "Risks".bold())?;
            let mut table = Table::new();
            table.load_preset(presets::UTF8_FULL_CONDENSED);
            table.set_header(vec!["Category", "Impact", "Description"]);
            for risk in &analysis.risks {
                table.add_row(vec![
                    risk.category.to_string(),
                    Self::impact_label(risk.impact).to_string(),
                    risk.description.clone(),
                ]);
            }
            writeln!(self.writer, "{table}")?;
            writeln!(self.writer)?;
        }

        writeln!(self.writer, "{}", "Phases".bold())?;
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL_CONDENSED);
        table.set_header(vec!["#", "Phase", "Duration", "Rollback point"]);
        for (index, phase) in analysis.suggested_phases.iter().enumerate() {
            table.add_row(vec![
                (index + 1).to_string(),
                phase.name.clone(),
                phase.estimated_duration.clone(),
                if phase.rollback_point { "yes" } else { "" }.to_string(),
            ]);
        }
        writeln!(self.writer, "{table}")?;

        if analysis.dependency_analysis.incompatible_count > 0 {
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "{} {} of {} dependencies are incompatible with {}",
                "!".yellow().bold(),
                analysis.dependency_analysis.incompatible_count,
                analysis.dependency_analysis.total_dependencies,
                analysis.target_stack.name
            )?;
            for replacement in &analysis.dependency_analysis.replacements {
                writeln!(
                    self.writer,
                    "    {} -> {}",
                    replacement.from,
                    replacement.to.green()
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StackshiftConfig;
    use crate::pipeline::{analyze_project, TargetSpec};
    use tempfile::TempDir;

    fn sample_analysis() -> MigrationAnalysis {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("package.json"),
            r#"{ "dependencies": { "express": "^4.18.2" } }"#,
        )
        .unwrap();
        analyze_project(
            dir.path(),
            &TargetSpec::new("fastapi"),
            &StackshiftConfig::default(),
        )
    }

    #[test]
    fn json_writer_emits_valid_json() {
        let analysis = sample_analysis();
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_analysis(&analysis)
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert!(parsed.get("complexity").is_some());
        assert!(parsed.get("rollback_strategy").is_some());
    }

    #[test]
    fn markdown_writer_includes_all_sections() {
        let analysis = sample_analysis();
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer)
            .write_analysis(&analysis)
            .unwrap();
        let report = String::from_utf8(buffer).unwrap();
        assert!(report.contains("# Migration Analysis Report"));
        assert!(report.contains("## Risks"));
        assert!(report.contains("## Migration Phases"));
        assert!(report.contains("## Rollback"));
    }

    #[test]
    fn terminal_writer_produces_output() {
        let analysis = sample_analysis();
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer)
            .write_analysis(&analysis)
            .unwrap();
        assert!(!buffer.is_empty());
    }
}
