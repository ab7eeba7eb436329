use super::ui;
use crate::core::codes::CurrencyInfo;
use comfy_table::Cell;

pub fn render(currencies: &[CurrencyInfo]) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Code"),
        ui::header_cell("Currency"),
        ui::header_cell("Symbol"),
    ]);
    for currency in currencies {
        table.add_row(vec![
            Cell::new(currency.code),
            Cell::new(currency.name),
            ui::optional_cell(currency.symbol),
        ]);
    }

    format!(
        "{}\n\n{}\n{}",
        ui::style_text("Currency Table", ui::StyleType::Title),
        table,
        ui::style_text(
            &format!("{} currencies", currencies.len()),
            ui::StyleType::Subtle
        )
    )
}

/// Prints every supported currency code.
pub fn run() {
    println!("{}", render(crate::core::codes::all_currencies()));
}
