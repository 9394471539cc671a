use crate::SourceArgs;
use anyhow::Result;
use clap::Parser;
use console::style;
use dbdef::Compiler;

#[derive(Parser, Debug)]
pub struct CompileCommand {
    #[command(flatten)]
    source: SourceArgs,
}

impl CompileCommand {
    pub(crate) fn run(self) -> Result<()> {
        let compiler = Compiler::new(self.source.config());

        let db = compiler.compile()?;

        println!();
        println!(
            "  {} Compiled {} object(s) into {} output(s)",
            style("✔").green().bold(),
            db.object_count(),
            db.outputs.len()
        );

        for output in &db.outputs {
            println!("    {} {}", style("→").cyan(), style(&output.name).bold());
        }
        println!();

        Ok(())
    }
}
