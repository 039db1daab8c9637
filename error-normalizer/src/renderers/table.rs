use super::OutputRenderer;
use crate::messages::GENERAL_KEY;
use crate::types::ErrorMap;
use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement,
    Table, TableComponent,
};

/// Builder for consistently styled tables
#[derive(Clone)]
pub struct TableBuilder {
    table: Table,
}

impl TableBuilder {
    /// Create a new table builder with default styling
    pub fn new() -> Self {
        let mut table = Table::new();

        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic);

        Self { table }
    }

    /// Drop the horizontal separators between rows
    pub fn compact(&mut self) -> &mut Self {
        self.table
            .remove_style(TableComponent::HorizontalLines)
            .remove_style(TableComponent::LeftBorderIntersections)
            .remove_style(TableComponent::RightBorderIntersections)
            .remove_style(TableComponent::MiddleIntersections);
        self
    }

    /// Set bold table headers
    pub fn headers<I, S>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let header_cells: Vec<Cell> = headers
            .into_iter()
            .map(|h| Cell::new(h.into()).add_attribute(Attribute::Bold))
            .collect();

        self.table.set_header(header_cells);
        self
    }

    /// Add a row with custom styled cells
    pub fn styled_row(&mut self, cells: Vec<Cell>) -> &mut Self {
        self.table.add_row(cells);
        self
    }

    /// Build and return the formatted table as a string
    pub fn build(self) -> String {
        self.table.to_string()
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders an error map as a compact "Field | Message" table
pub struct TableRenderer;

impl TableRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputRenderer for TableRenderer {
    fn render(&self, errors: &ErrorMap) -> String {
        let mut builder = TableBuilder::new();
        builder.compact().headers(["Field", "Message"]);

        for (field, message) in errors.iter() {
            // general messages are not tied to a field, so they are dimmed
            let field_cell = if field == GENERAL_KEY {
                Cell::new(field).fg(Color::DarkGrey)
            } else {
                Cell::new(field).add_attribute(Attribute::Bold)
            };
            builder.styled_row(vec![field_cell, Cell::new(message)]);
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_builder_basic() {
        let mut builder = TableBuilder::new();
        builder.headers(vec!["Name", "Value"]);
        builder.styled_row(vec![Cell::new("test"), Cell::new("123")]);
        let table = builder.build();

        assert!(table.contains("Name"));
        assert!(table.contains("123"));
    }

    #[test]
    fn test_error_map_table() {
        let errors: ErrorMap = vec![("email", "Taken"), ("general", "Please fix the errors")]
            .into_iter()
            .collect();
        let table = TableRenderer::new().render(&errors);

        assert!(table.contains("Field"));
        assert!(table.contains("Message"));
        assert!(table.contains("email"));
        assert!(table.contains("Taken"));
        assert!(table.contains("Please fix the errors"));
    }
}
