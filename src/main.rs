use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::PathBuf,
};

use clap::Parser;
use console::{style, Emoji};
use xmltree::{Element, EmitterConfig};

mod args;
use args::*;

mod upsert;
use upsert::upsert_field;

#[derive(Parser)]
#[command(about, version)]
pub struct Args {
    /// Path to the XML project descriptor to update
    #[arg(value_name = "descriptor")]
    descriptor:     PathBuf,
    /// Version string to write [default: taken from the VERSION environment variable]
    #[arg(short = 's', long, env = "VERSION", hide_env_values = true)]
    set:            String,
    /// Tag name of the version field
    #[arg(short = 'f', long, default_value = "Version")]
    field:          String,
    /// Tag name of the grouping element new fields are created under
    #[arg(short = 'g', long, default_value = "PropertyGroup")]
    group:          String,
    /// Also update the assembly version field
    #[arg(short = 'a', long)]
    assembly:       bool,
    /// Tag name of the assembly version field
    #[arg(long, default_value = "AssemblyVersion")]
    assembly_field: String,
}

fn main() {
    color_backtrace::install();

    let args = Args::parse();

    let descriptor = get_descriptor(&args.descriptor);
    let version = get_version(&args.set);

    println!(
        "{} {}reading {}…",
        style("[1/3]").bold().black(),
        Emoji("🔍 ", ""),
        style(descriptor.display()).blue()
    );
    let file = File::open(&descriptor).unwrap_or_else(|error| {
        println!(
            "{}: {}",
            style("couldn't open the project descriptor").red(),
            error
        );
        std::process::exit(-1);
    });
    let mut document = Element::parse(BufReader::new(file)).unwrap_or_else(|error| {
        println!(
            "{}: {}",
            style("couldn't parse the project descriptor").red(),
            error
        );
        std::process::exit(-1);
    });

    let fields = if args.assembly {
        vec![args.field.as_str(), args.assembly_field.as_str()]
    } else {
        vec![args.field.as_str()]
    };
    println!(
        "{} {}setting {} to {}…",
        style("[2/3]").bold().black(),
        Emoji("📝 ", ""),
        style(fields.join(", ")).blue(),
        style(&version).magenta()
    );
    for field in &fields {
        upsert_field(&mut document, field, &args.group, &version);
    }

    println!(
        "{} {}writing {}…",
        style("[3/3]").bold().black(),
        Emoji("📃 ", ""),
        style(descriptor.display()).blue()
    );
    let file = File::create(&descriptor).unwrap_or_else(|error| {
        println!(
            "{}: {}",
            style("couldn't overwrite the project descriptor").red(),
            error
        );
        std::process::exit(-1);
    });
    let mut writer = BufWriter::new(file);
    document
        .write_with_config(&mut writer, EmitterConfig::new().perform_indent(true))
        .unwrap_or_else(|error| {
            println!(
                "{}: {}",
                style("couldn't write the project descriptor").red(),
                error
            );
            std::process::exit(-1);
        });
    writer.flush().unwrap_or_else(|error| {
        println!(
            "{}: {}",
            style("couldn't write the project descriptor").red(),
            error
        );
        std::process::exit(-1);
    });

    println!(
        "      {}{} {} {} {}",
        Emoji("✨ ", ""),
        style("set").green(),
        style(fields.len()).magenta(),
        style(if fields.len() == 1 {
            "version field to"
        } else {
            "version fields to"
        })
        .green(),
        style(&version).magenta()
    );
}
