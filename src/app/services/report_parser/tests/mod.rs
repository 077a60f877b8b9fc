//! Test fixtures and helpers for the report parser
//!
//! Fixture content mirrors real Meta Ads and Google Ads exports:
//! Spanish headers, semicolon delimiters, CLP-style thousands dots and
//! trailing total rows.

mod lines_tests;
mod parser_tests;

/// A typical Chilean Meta Ads export: semicolon-delimited, Spanish
/// headers, dot thousands separators and a trailing total row
pub fn meta_clp_report() -> String {
    [
        "Nombre de la campaña;Importe gastado (CLP);Resultados;Alcance;Impresiones",
        "Campaña Verano;208.562;12;45.120;80.344",
        "Campaña Invierno;96.500;8;22.010;35.880",
        "Total;305.062;20;67.130;116.224",
    ]
    .join("\n")
}

/// A comma-delimited English export with quoted names and US-style
/// numbers
pub fn meta_us_report() -> String {
    [
        "Campaign name,Amount spent,Results,Reach,Impressions",
        "\"Launch, Phase One\",\"1,234.56\",10,\"5,000\",\"9,000\"",
        "\"Always On\",500.25,5,\"2,500\",\"4,100\"",
    ]
    .join("\n")
}

/// An export with report metadata above the header row, padded with
/// the delimiter the way spreadsheet exports pad short rows
pub fn report_with_preamble() -> String {
    [
        "Informe de rendimiento;;",
        "Periodo: 01-06-2025 al 30-06-2025;;",
        "Cuenta: 1234;;",
        "Campaña;Costo;Resultados",
        "Campaña A;1.000;10",
        "Campaña B;2.000;5",
    ]
    .join("\n")
}
