use tabled::{builder::Builder, Table};

use price_table_core::types::{LoanInputs, ScheduleResult};

use super::currency::{format_currency, format_rate};

/// Render the summary figures and the full schedule as tables.
pub fn print_table(inputs: &LoanInputs, result: &ScheduleResult) {
    if result.is_empty() {
        println!("Sem dados para exibir.");
        return;
    }

    let mut summary = Builder::default();
    summary.push_record(["Resumo do Contrato", "Valores"]);
    summary.push_record(["Valor Financiado", &format_currency(inputs.principal)]);
    summary.push_record(["Parcelas", &format!("{}x", inputs.period_count)]);
    summary.push_record(["Taxa de Juros", &format_rate(inputs.periodic_rate)]);
    summary.push_record(["Prestação Mensal", &format_currency(result.monthly_payment)]);
    summary.push_record(["Total de Juros", &format_currency(result.total_interest)]);
    summary.push_record(["Valor Total Pago", &format_currency(result.total_payment)]);
    println!("{}", Table::from(summary));

    println!();

    let mut schedule = Builder::default();
    schedule.push_record(["Mês", "Prestação", "Juros", "Amortização", "Saldo Devedor"]);
    for row in &result.schedule {
        schedule.push_record([
            row.number.to_string(),
            format_currency(row.payment),
            format_currency(row.interest),
            format_currency(row.amortization),
            format_currency(row.balance),
        ]);
    }
    println!("{}", Table::from(schedule));
}
