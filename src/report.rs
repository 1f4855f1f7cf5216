//! Aggregate summary report generation.
//!
//! Renders the cross-case statistics as Markdown or JSON for `--report`.

use anyhow::Result;

use crate::models::AggregateReport;

/// Generate a Markdown summary report.
pub fn generate_markdown_report(report: &AggregateReport) -> String {
    let mut output = String::new();

    output.push_str("# Schwarzsim Summary\n\n");
    output.push_str(&generate_metadata_section(report));
    output.push_str(&generate_summary_table(report));

    output
}

/// Generate a JSON summary report.
pub fn generate_json_report(report: &AggregateReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

fn generate_metadata_section(report: &AggregateReport) -> String {
    let mut section = String::new();

    section.push_str("## Metadata\n\n");
    section.push_str(&format!(
        "- **Generated:** {}\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    section.push_str(&format!("- **Output Root:** `{}`\n", report.output_root));
    section.push_str(&format!("- **Cases:** {}\n", report.case_count));
    section.push('\n');

    section
}

fn generate_summary_table(report: &AggregateReport) -> String {
    let mut section = String::new();

    section.push_str("## Dilation Factor Statistics\n\n");

    if report.summaries.is_empty() {
        section.push_str("No case results were found.\n");
        return section;
    }

    section.push_str("| Case | Min | Max | Mean | Std Dev |\n");
    section.push_str("|------|-----|-----|------|--------|\n");
    for s in &report.summaries {
        section.push_str(&format!(
            "| {} | {:.4} | {:.4} | {:.4} | {:.4} |\n",
            s.case_name, s.min, s.max, s.mean, s.std_dev
        ));
    }
    section.push('\n');

    section
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CaseSummary;

    fn create_test_report() -> AggregateReport {
        AggregateReport::new(
            "results",
            vec![
                CaseSummary {
                    case_name: "Neutron Star".to_string(),
                    min: 0.0995,
                    max: 0.8944,
                    mean: 0.7523,
                    std_dev: 0.1534,
                },
                CaseSummary {
                    case_name: "Stellar Black Hole".to_string(),
                    min: 0.0995,
                    max: 0.9487,
                    mean: 0.8318,
                    std_dev: 0.1359,
                },
            ],
        )
    }

    #[test]
    fn test_generate_markdown_report() {
        let report = create_test_report();
        let markdown = generate_markdown_report(&report);

        assert!(markdown.contains("# Schwarzsim Summary"));
        assert!(markdown.contains("## Metadata"));
        assert!(markdown.contains("`results`"));
        assert!(markdown.contains("| Neutron Star | 0.0995 | 0.8944 | 0.7523 | 0.1534 |"));
        assert!(markdown.contains("Stellar Black Hole"));
    }

    #[test]
    fn test_generate_markdown_report_without_cases() {
        let report = AggregateReport::new("results", Vec::new());
        let markdown = generate_markdown_report(&report);
        assert!(markdown.contains("No case results were found."));
    }

    #[test]
    fn test_generate_json_report() {
        let report = create_test_report();
        let json = generate_json_report(&report).unwrap();

        assert!(json.contains("\"output_root\""));
        assert!(json.contains("\"summaries\""));
        assert!(json.contains("\"case_name\""));
        assert!(json.contains("Neutron Star"));
    }
}
