//! Integration tests for the report parsing pipeline
//!
//! These tests exercise the public library surface end to end with
//! realistic export content, including files read from disk the way
//! the CLI does.

use std::io::Write;

use tempfile::NamedTempFile;

use adshub_processor::app::models::Platform;
use adshub_processor::app::services::insights::compute_stats;
use adshub_processor::app::services::report_parser::ReportParser;

/// The canonical end-to-end scenario: a semicolon-delimited Spanish
/// export with a trailing total row yields exactly one record.
#[test]
fn test_end_to_end_single_record() {
    let parser = ReportParser::new();
    let result = parser.parse_text(
        "Campaña;Costo;Resultados\nCampaña A;1.000;10\nTotal;1.000;10\n",
        Platform::Meta,
    );

    assert_eq!(result.campaigns.len(), 1);
    let campaign = &result.campaigns[0];
    assert_eq!(campaign.name, "Campaña A");
    assert_eq!(campaign.spend, 1000.0);
    assert_eq!(campaign.results, 10.0);
    assert_eq!(campaign.cost_per_result, 100.0);
    assert_eq!(campaign.reach, 0.0);
    assert_eq!(campaign.impressions, 0.0);
}

/// A messy multi-locale export: preamble lines, quoted names with
/// embedded delimiters, CLP thousands dots, missing-value markers and
/// ragged rows all in one file.
#[test]
fn test_end_to_end_messy_export() {
    let content = "\
Informe de rendimiento;;;;\r\n\
Periodo: 01-06-2025 al 30-06-2025;;;;\r\n\
\r\n\
Nombre de la campaña;Importe gastado (CLP);Resultados;Alcance;Impresiones\r\n\
\"Campaña; Lanzamiento\";208.562;12;45.120;80.344\r\n\
Campaña Retargeting;1.234,56;8;--;22.010\r\n\
Campaña Corta;5.000\r\n\
Total;214.796;20;45.120;102.354\r\n";

    let parser = ReportParser::new();
    let result = parser.parse_text(content, Platform::Meta);

    assert_eq!(result.campaigns.len(), 3);
    assert_eq!(result.stats.header_row, 2);
    assert_eq!(result.stats.rows_filtered, 1);

    let first = &result.campaigns[0];
    assert_eq!(first.id, "c-0");
    assert_eq!(first.name, "Campaña; Lanzamiento");
    assert_eq!(first.spend, 208562.0);
    assert_eq!(first.reach, 45120.0);

    let second = &result.campaigns[1];
    assert_eq!(second.spend, 1234.56);
    assert_eq!(second.reach, 0.0);
    assert_eq!(second.impressions, 22010.0);

    // Ragged row: missing cells default to zero
    let third = &result.campaigns[2];
    assert_eq!(third.spend, 5000.0);
    assert_eq!(third.results, 0.0);
    assert_eq!(third.cost_per_result, 0.0);
}

/// Reports read from disk parse identically to in-memory text
#[test]
fn test_parse_report_file_from_disk() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "Campaign name,Amount spent,Results,Reach,Impressions\n\
         Summer Launch,\"1,234.56\",10,\"5,000\",\"9,000\"\n\
         Grand Total,\"1,234.56\",10,\"5,000\",\"9,000\"\n"
    )
    .unwrap();

    let content = std::fs::read_to_string(file.path()).unwrap();
    let result = ReportParser::new().parse_text(&content, Platform::Meta);

    assert_eq!(result.campaigns.len(), 1);
    assert_eq!(result.campaigns[0].name, "Summer Launch");
    assert_eq!(result.campaigns[0].spend, 1234.56);
    assert_eq!(result.stats.delimiter, ',');
}

/// Parsed records feed directly into dashboard statistics
#[test]
fn test_parse_then_compute_stats() {
    let content = "Campaña;Costo;Resultados\n\
                   Campaña A;1.000;10\n\
                   Campaña B;3.000;10\n\
                   Campaña C;500;5\n";

    let result = ReportParser::new().parse_text(content, Platform::Meta);
    let stats = compute_stats(&result.campaigns, Platform::Meta);

    assert_eq!(stats.total_spend, 4500.0);
    assert_eq!(stats.total_results, 25.0);
    assert_eq!(stats.avg_cost_per_result, 180.0);

    // A and B tie on results; A wins on lower cost per result
    assert_eq!(stats.star_campaign.as_ref().unwrap().name, "Campaña A");

    // Only B (CPA 300) exceeds 1.2x the average (216)
    assert_eq!(stats.underperforming_campaigns.len(), 1);
    assert_eq!(stats.underperforming_campaigns[0].name, "Campaña B");
}

/// Records serialize with the camelCase wire field names
#[test]
fn test_records_serialize_for_downstream_consumers() {
    let result = ReportParser::new().parse_text(
        "Campaña;Costo;Resultados\nCampaña A;1.000;10\n",
        Platform::Meta,
    );

    let json = serde_json::to_value(&result.campaigns).unwrap();
    assert_eq!(json[0]["id"], "c-0");
    assert_eq!(json[0]["costPerResult"], 100.0);
    assert_eq!(json[0]["status"], "Active");
}
