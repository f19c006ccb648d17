use crate::services::result_schema::BREAKDOWN_FIELDS;
use crate::structs::accessibility_finding::AccessibilityFinding;

pub fn generate_audit_prompt(url: &str, findings: &[AccessibilityFinding]) -> String {
    let mut prompt = format!("Analyze the website at {} and score its user experience.\n\n", url);

    prompt.push_str("Automated accessibility inspection results:\n");
    if findings.is_empty() {
        prompt.push_str("no violations found\n");
    } else {
        for finding in findings {
            prompt.push_str(&format!(
                "- {}: {} ({} occurrences)\n",
                finding.id,
                finding.description,
                finding.occurrence_count()
            ));
        }
    }

    prompt.push_str(&format!(
        "\nScore the following dimensions from 0 to 100: {}.\n",
        BREAKDOWN_FIELDS.join(", ")
    ));
    prompt.push_str(
        "Provide an overall score from 0 to 100, a prioritized list of improvements \
         (priority high, medium or low, each with title, why and how), an executive summary, \
         and a developer todo list.\n",
    );

    prompt
}
