use super::{flag, OutputProvider};
use console::{measure_text_width, pad_str, style, Alignment, Term};
use dbdef_core::{
    schema::{Constraint, Function, OutputRequest, Properties, Sequence, Table},
    Error, Result,
};
use std::io::Write;

/// Which objects and table sections the console output prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleOptions {
    /// `func`
    pub functions: bool,

    /// `seq`
    pub sequences: bool,

    /// `tbl`
    pub tables: bool,

    /// `tbl_index`
    pub table_indexes: bool,

    /// `tbl_unq`
    pub table_unique_keys: bool,
}

impl ConsoleOptions {
    pub fn from_request(request: &OutputRequest) -> ConsoleOptions {
        ConsoleOptions {
            functions: flag(request, "func", true),
            sequences: flag(request, "seq", true),
            tables: flag(request, "tbl", true),
            table_indexes: flag(request, "tbl_index", true),
            table_unique_keys: flag(request, "tbl_unq", true),
        }
    }
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        ConsoleOptions {
            functions: true,
            sequences: true,
            tables: true,
            table_indexes: true,
            table_unique_keys: true,
        }
    }
}

/// Prints a styled, human-readable dump of every object.
pub struct ConsoleOutput {
    options: ConsoleOptions,
    out: Box<dyn Write>,
}

impl ConsoleOutput {
    pub fn new(options: ConsoleOptions) -> ConsoleOutput {
        ConsoleOutput::with_writer(options, Term::stdout())
    }

    pub fn with_writer(options: ConsoleOptions, out: impl Write + 'static) -> ConsoleOutput {
        ConsoleOutput {
            options,
            out: Box::new(out),
        }
    }

    fn emit(&mut self, report: Report) -> Result<()> {
        self.out
            .write_all(report.buf.as_bytes())
            .map_err(|err| Error::io("<stdout>", err))
    }
}

impl OutputProvider for ConsoleOutput {
    fn write_table(&mut self, table: &Table) -> Result<()> {
        if !self.options.tables {
            return Ok(());
        }

        let report = render_table(table, &self.options);
        self.emit(report)
    }

    fn write_sequence(&mut self, sequence: &Sequence) -> Result<()> {
        if !self.options.sequences {
            return Ok(());
        }

        let report = render_sequence(sequence);
        self.emit(report)
    }

    fn write_function(&mut self, function: &Function) -> Result<()> {
        if !self.options.functions {
            return Ok(());
        }

        let report = render_function(function);
        self.emit(report)
    }

    fn commit(mut self: Box<Self>) -> Result<()> {
        self.out.flush().map_err(|err| Error::io("<stdout>", err))
    }
}

fn render_table(table: &Table, options: &ConsoleOptions) -> Report {
    let mut report = Report::default();

    report.title("Table", &table.name);
    report.properties(&table.properties);

    report.section("Columns:");
    if table.columns.is_empty() {
        report.missing("columns", true);
    } else {
        let mut grid = Grid::new(["Name", "Description", "Type", "Not Null", "Default Value"]);
        for column in &table.columns {
            grid.row([
                column.name.clone(),
                column
                    .description
                    .clone()
                    .unwrap_or_else(|| "[No description]".to_string()),
                column.ty.clone(),
                yes_no(column.not_null).to_string(),
                column
                    .default
                    .clone()
                    .unwrap_or_else(|| "[No default]".to_string()),
            ]);
        }
        report.grid(&grid);
    }
    report.spacer();

    report.section("Primary Key:");
    match &table.primary_key {
        Some(pk) => report.grid(&constraints_grid([pk])),
        None => report.missing("primary key", true),
    }
    report.spacer();

    if options.table_unique_keys {
        report.section("Unique keys:");
        if table.unique_keys.is_empty() {
            report.missing("unique keys", false);
        } else {
            report.grid(&constraints_grid(&table.unique_keys));
        }
        report.spacer();
    }

    if options.table_indexes {
        report.section("Indexes:");
        if table.indexes.is_empty() {
            report.missing("indexes", false);
        } else {
            let mut grid = Grid::new(["Name", "Type", "Columns"]);
            for index in &table.indexes {
                let columns = index
                    .columns
                    .iter()
                    .map(|(column, order)| format!("{column}: {order}"))
                    .collect::<Vec<_>>()
                    .join("\n");
                grid.row([index.name.clone(), index.ty.clone(), columns]);
            }
            report.grid(&grid);
        }
        report.spacer();
    }

    report
}

fn render_sequence(sequence: &Sequence) -> Report {
    let mut report = Report::default();
    report.title("Sequence", &sequence.name);
    report.properties(&sequence.properties);
    report
}

fn render_function(function: &Function) -> Report {
    let mut report = Report::default();

    report.title("Function", &function.name);
    report.properties(&function.properties);

    report.section("Parameters:");
    if function.params.is_empty() {
        report.missing("parameters", false);
    } else {
        let mut grid = Grid::new(["Name", "Type", "Direction", "Default Value"]);
        for param in &function.params {
            grid.row([
                param.name.clone(),
                param.ty.clone(),
                param.direction.to_string(),
                param
                    .default
                    .clone()
                    .unwrap_or_else(|| "[No default]".to_string()),
            ]);
        }
        report.grid(&grid);
    }
    report.spacer();

    report.section("Return Info:");
    let returns = &function.returns;
    let columns = if returns.is_table() {
        returns
            .columns()
            .iter()
            .map(|(name, ty)| format!("{name}: {ty}"))
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        "-".to_string()
    };
    let mut grid = Grid::new(["Type", "Columns"]);
    grid.row([returns.ty().to_string(), columns]);
    report.grid(&grid);
    report.spacer();

    report
}

fn constraints_grid<'a>(constraints: impl IntoIterator<Item = &'a Constraint>) -> Grid {
    let mut grid = Grid::new(["Name", "Columns"]);
    for constraint in constraints {
        let columns = constraint
            .columns
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",");
        grid.row([constraint.name.clone(), columns]);
    }
    grid
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Accumulates the styled text printed for one object.
#[derive(Default)]
struct Report {
    buf: String,
}

impl Report {
    fn title(&mut self, prefix: &str, name: &str) {
        let title = format!("{prefix}: {name}");
        let rule = "=".repeat(measure_text_width(&title));
        self.line(style(&rule).blue());
        self.line(style(&title).blue().bold());
        self.line(style(&rule).blue());
    }

    fn section(&mut self, title: &str) {
        self.line(style(title).underlined());
    }

    fn properties(&mut self, properties: &Properties) {
        self.section("Properties:");

        let mut grid = Grid::new(["Name", "Value"]);
        for (key, value) in properties.iter() {
            grid.row([key.to_string(), value.unwrap_or_default().to_string()]);
        }
        self.grid(&grid);

        self.spacer();
    }

    /// `error` marks sections every object of the kind is expected to have.
    fn missing(&mut self, what: &str, error: bool) {
        let message = style(format!("Missing {what}!"));
        if error {
            self.line(message.red().bright());
        } else {
            self.line(message.yellow().bright());
        }
    }

    fn grid(&mut self, grid: &Grid) {
        self.buf.push_str(&grid.render());
    }

    fn spacer(&mut self) {
        self.buf.push('\n');
    }

    fn line(&mut self, text: impl std::fmt::Display) {
        self.buf.push_str(&text.to_string());
        self.buf.push('\n');
    }
}

/// A bordered text table. Cells may span several lines.
struct Grid {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Grid {
    fn new<const N: usize>(header: [&str; N]) -> Grid {
        Grid {
            header: header.iter().map(|name| name.to_string()).collect(),
            rows: vec![],
        }
    }

    fn row<const N: usize>(&mut self, cells: [String; N]) {
        self.rows.push(cells.into());
    }

    fn render(&self) -> String {
        let mut widths: Vec<usize> = self
            .header
            .iter()
            .map(|name| measure_text_width(name))
            .collect();

        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                for line in cell.lines() {
                    *width = (*width).max(measure_text_width(line));
                }
            }
        }

        let border = widths
            .iter()
            .fold(String::from("+"), |mut border, width| {
                border.push_str(&"-".repeat(width + 2));
                border.push('+');
                border
            });

        let mut ret = String::new();
        ret.push_str(&border);
        ret.push('\n');
        Self::render_row(&mut ret, &self.header, &widths);
        ret.push_str(&border);
        ret.push('\n');

        for row in &self.rows {
            Self::render_row(&mut ret, row, &widths);
        }

        if !self.rows.is_empty() {
            ret.push_str(&border);
            ret.push('\n');
        }

        ret
    }

    fn render_row(dst: &mut String, cells: &[String], widths: &[usize]) {
        let lines: Vec<Vec<&str>> = cells.iter().map(|cell| cell.lines().collect()).collect();
        let height = lines.iter().map(Vec::len).max().unwrap_or(0).max(1);

        for i in 0..height {
            dst.push('|');
            for (cell, width) in lines.iter().zip(widths) {
                let text = cell.get(i).copied().unwrap_or_default();
                dst.push(' ');
                dst.push_str(&pad_str(text, *width, Alignment::Left, None));
                dst.push_str(" |");
            }
            dst.push('\n');
        }
    }
}
