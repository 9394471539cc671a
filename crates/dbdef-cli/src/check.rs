use crate::SourceArgs;
use anyhow::Result;
use clap::Parser;
use console::style;
use dbdef::Compiler;

#[derive(Parser, Debug)]
pub struct CheckCommand {
    #[command(flatten)]
    source: SourceArgs,
}

impl CheckCommand {
    pub(crate) fn run(self) -> Result<()> {
        let compiler = Compiler::new(self.source.config());
        let db = compiler.parse()?;

        println!();
        println!("  {}", style("Definitions").cyan().bold().underlined());
        println!();

        let objects = db
            .sequences
            .iter()
            .map(|sequence| ("Sequence", sequence.name.as_str()))
            .chain(db.tables.iter().map(|table| ("Table", table.name.as_str())))
            .chain(
                db.functions
                    .iter()
                    .map(|function| ("Function", function.name.as_str())),
            );

        for (kind, name) in objects {
            println!(
                "  {} {:<9} {}",
                style("→").cyan(),
                kind,
                style(name).bold()
            );
        }

        println!();

        if db.outputs.is_empty() {
            println!(
                "  {}",
                style("No outputs configured in makefile.").yellow().dim()
            );
        } else {
            for output in &db.outputs {
                println!("  {} output {}", style("•").dim(), style(&output.name).bold());
            }
        }

        println!();
        println!(
            "  {} {} object(s) parsed",
            style("✔").green().bold(),
            db.object_count()
        );
        println!();

        Ok(())
    }
}
