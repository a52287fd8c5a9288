use comfy_table::{Cell, CellAlignment, Color, Table, modifiers, presets};
use energyzero::PriceEntry;

/// Prices colored against the reference, usually the period average.
pub fn build_prices_table(entries: &[PriceEntry], reference: Option<f64>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_header(vec!["Reading date", "Price"]);
    for entry in entries {
        let price = Cell::new(format!("{:.5} €/kWh", entry.price))
            .set_alignment(CellAlignment::Right)
            .fg(match reference {
                Some(reference) if entry.price > reference => Color::Red,
                Some(_) => Color::Green,
                None => Color::Reset,
            });
        table.add_row(vec![Cell::new(&entry.reading_date), price]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_prices_table_ok() {
        let entries = [
            PriceEntry { reading_date: "2023-05-01T00:00:00Z".into(), price: 0.1 },
            PriceEntry { reading_date: "2023-05-01T01:00:00Z".into(), price: 0.2 },
        ];
        let rendered = build_prices_table(&entries, Some(0.15)).to_string();
        assert!(rendered.contains("2023-05-01T01:00:00Z"));
        assert!(rendered.contains("0.20000 €/kWh"));
    }
}
