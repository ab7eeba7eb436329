use super::ui;
use crate::core::converter::{ConversionResult, CurrencyConverter};
use crate::core::currency::ExchangeRateProvider;
use anyhow::Result;

impl ConversionResult {
    pub fn display_as_table(&self) -> String {
        let mut table = ui::new_styled_table();

        table.set_header(vec![
            ui::header_cell("From"),
            ui::header_cell("To"),
            ui::header_cell("Amount"),
            ui::header_cell("Rate"),
            ui::header_cell("Converted"),
            ui::header_cell("As of"),
        ]);
        table.add_row(vec![
            comfy_table::Cell::new(&self.from_currency),
            comfy_table::Cell::new(&self.to_currency),
            ui::number_cell(self.display_amount()),
            ui::number_cell(format!("{:.4}", self.rate)),
            ui::number_cell(self.display_converted()),
            comfy_table::Cell::new(self.as_of.format("%Y-%m-%d")),
        ]);

        let mut output = format!(
            "{}\n\n",
            ui::style_text("Currency Conversion", ui::StyleType::Title)
        );
        output.push_str(&table.to_string());
        output.push_str(&format!(
            "\n\n{} {}",
            ui::style_text(&format!("Total ({}):", self.to_currency), ui::StyleType::TotalLabel),
            ui::style_text(&self.display_converted(), ui::StyleType::TotalValue)
        ));
        output
    }
}

/// Converts one amount and prints the result.
pub async fn run<P: ExchangeRateProvider>(
    converter: &CurrencyConverter<P>,
    amount: f64,
    from: &str,
    to: &str,
) -> Result<()> {
    let pb = ui::new_spinner(&format!("Fetching {}/{} rate...", from, to));
    let result = converter.convert_currency(amount, from, to).await;
    pb.finish_and_clear();

    println!("{}", result?.display_as_table());
    Ok(())
}
