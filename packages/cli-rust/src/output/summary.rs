//! Post-init summary.

use console::style;
use prod_env_core::InitReport;

/// Lines describing what was written, for stdout
pub fn summary_lines(report: &InitReport) -> Vec<String> {
    let mut lines = vec![format!(
        "{} Wrote {}",
        style("Success:").green().bold(),
        style(report.output_path.display()).cyan()
    )];

    if report.updated.is_empty() {
        lines.push(format!(
            "  {}",
            style("No CHANGE_ME placeholders found; template copied unchanged.").dim()
        ));
    } else {
        lines.push("  Updated keys:".to_string());
        for applied in &report.updated {
            lines.push(format!(
                "    {} {}",
                style(&applied.key).bold(),
                style(applied.replacement.redacted()).dim()
            ));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Next: {}",
        style(format!(
            "docker compose --env-file {} up -d",
            report.output_path.display()
        ))
        .green()
    ));
    lines
}

/// Warnings for supplied keys that had no line to land on, for stderr
pub fn unapplied_warning_lines(report: &InitReport) -> Vec<String> {
    report
        .unapplied
        .iter()
        .map(|key| {
            format!(
                "{} {} was supplied but the template has no {}= line; it was not written.",
                style("Warning:").yellow().bold(),
                key,
                key
            )
        })
        .collect()
}

/// Print the summary and any warnings
pub fn print_summary(report: &InitReport) {
    for line in unapplied_warning_lines(report) {
        eprintln!("{line}");
    }
    for line in summary_lines(report) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prod_env_core::{AppliedReplacement, Replacement, SecretKind};
    use std::path::PathBuf;

    fn report() -> InitReport {
        InitReport {
            output_path: PathBuf::from("/srv/app/.prod.secrets.env"),
            updated: vec![
                AppliedReplacement {
                    key: "TOKEN_SECRET".to_string(),
                    replacement: Replacement::generated(SecretKind::Password),
                },
                AppliedReplacement {
                    key: "LLM_BINDING_API_KEY".to_string(),
                    replacement: Replacement::supplied("sk-live-98765"),
                },
            ],
            unapplied: Vec::new(),
        }
    }

    #[test]
    fn summary_never_contains_generated_secret() {
        let report = report();
        let secret = report.updated[0].replacement.value().to_string();
        let joined = summary_lines(&report).join("\n");
        assert!(!joined.contains(&secret));
        assert!(joined.contains("TOKEN_SECRET"));
        assert!(joined.contains("(generated)"));
    }

    #[test]
    fn summary_masks_llm_key_to_last_four() {
        let joined = summary_lines(&report()).join("\n");
        assert!(joined.contains("...8765"));
        assert!(!joined.contains("sk-live-98765"));
    }

    #[test]
    fn summary_mentions_compose_next_step() {
        let joined = summary_lines(&report()).join("\n");
        assert!(joined.contains("docker compose --env-file /srv/app/.prod.secrets.env up -d"));
    }

    #[test]
    fn summary_without_updates_says_so() {
        let report = InitReport {
            output_path: PathBuf::from(".prod.secrets.env"),
            updated: Vec::new(),
            unapplied: Vec::new(),
        };
        let joined = summary_lines(&report).join("\n");
        assert!(joined.contains("No CHANGE_ME placeholders found"));
    }

    #[test]
    fn unapplied_keys_produce_warnings() {
        let report = InitReport {
            output_path: PathBuf::from(".prod.secrets.env"),
            updated: Vec::new(),
            unapplied: vec!["LLM_BINDING_API_KEY".to_string()],
        };
        let lines = unapplied_warning_lines(&report);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("LLM_BINDING_API_KEY"));
    }
}
