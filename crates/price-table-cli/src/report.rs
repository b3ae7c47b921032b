//! Printable schedule report: a plain-text, page-broken rendition of the
//! same data the on-screen table shows. Pages are separated by form feeds;
//! each page carries a numbered footer.

use chrono::NaiveDate;

use price_table_core::types::{InstallmentRow, LoanInputs, ScheduleResult};

use crate::output::currency::{format_currency, format_rate};

const ROWS_PER_PAGE: usize = 40;
const FALLBACK_CLIENT_TOKEN: &str = "cliente";
const UNNAMED_CLIENT: &str = "Não informado";

/// Deterministic artifact name derived from the client identifier:
/// lowercased, whitespace runs collapsed to `-`, falling back to a fixed
/// token when nothing printable remains.
pub fn file_name(client_name: &str) -> String {
    let slug = client_name
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        format!("price-calculo-{FALLBACK_CLIENT_TOKEN}.txt")
    } else {
        format!("price-calculo-{slug}.txt")
    }
}

/// Build the full report document. The generation date is a parameter so
/// the document is reproducible; the CLI passes today's date.
pub fn render(inputs: &LoanInputs, result: &ScheduleResult, date: NaiveDate) -> String {
    let chunks: Vec<&[InstallmentRow]> = result.schedule.chunks(ROWS_PER_PAGE).collect();
    let page_count = chunks.len().max(1);

    let mut pages = Vec::with_capacity(page_count);
    for page in 0..page_count {
        let mut body = String::new();

        if page == 0 {
            body.push_str(&preamble(inputs, result, date));
        }

        body.push_str(&format!(
            "{:>5}  {:>16}  {:>16}  {:>16}  {:>16}\n",
            "Mês", "Prestação", "Juros", "Amortização", "Saldo Devedor"
        ));
        match chunks.get(page) {
            Some(rows) => {
                for row in *rows {
                    body.push_str(&format!(
                        "{:>5}  {:>16}  {:>16}  {:>16}  {:>16}\n",
                        row.number,
                        format_currency(row.payment),
                        format_currency(row.interest),
                        format_currency(row.amortization),
                        format_currency(row.balance),
                    ));
                }
            }
            None => body.push_str("Sem parcelas para exibir.\n"),
        }

        body.push_str(&format!(
            "\nGerado por Calculadora Price — página {} de {}\n",
            page + 1,
            page_count
        ));
        pages.push(body);
    }

    pages.join("\u{c}")
}

fn preamble(inputs: &LoanInputs, result: &ScheduleResult, date: NaiveDate) -> String {
    let client = match inputs.client_name.trim() {
        "" => UNNAMED_CLIENT,
        name => name,
    };

    let mut text = String::new();
    text.push_str("Relatório de Financiamento - Tabela Price\n");
    text.push_str(&format!("Data: {}\n", date.format("%d/%m/%Y")));
    text.push_str(&format!("Cliente: {client}\n\n"));

    text.push_str("Resumo do Contrato\n");
    let summary = [
        ("Valor Financiado", format_currency(inputs.principal)),
        ("Parcelas", format!("{}x", inputs.period_count)),
        ("Taxa de Juros", format_rate(inputs.periodic_rate)),
        ("Prestação Mensal", format_currency(result.monthly_payment)),
        ("Total de Juros", format_currency(result.total_interest)),
        ("Valor Total Pago", format_currency(result.total_payment)),
    ];
    for (label, value) in summary {
        text.push_str(&format!("  {label:<18} {value}\n"));
    }
    text.push('\n');
    text
}
