use clap::Parser;
use dossier::model::Photo;
use dossier::{DocumentGenerator, Locale, PipelineError, RenderRequest, TemplateKind};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Render an application package from a JSON export", long_about = None)]
struct Args {
    /// JSON file holding `{ record, layout, selection }`
    #[arg(long, default_value = "demos/data/application.json")]
    input: PathBuf,

    /// Where to write the PDF
    #[arg(long, default_value = "application.pdf")]
    output: PathBuf,

    /// Overrides the template named in the layout
    #[arg(long)]
    template: Option<String>,

    /// Renders every template into `<output stem>-<template>.pdf`
    #[arg(long, default_value_t = false)]
    all_templates: bool,

    /// JPEG or PNG used as the applicant photo
    #[arg(long)]
    photo: Option<PathBuf>,

    /// Output language (en or de)
    #[arg(long, default_value = "en")]
    locale: String,
}

fn main() -> Result<(), PipelineError> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "dossier=info");
        }
    }
    env_logger::init();

    let args = Args::parse();

    let mut request = RenderRequest::from_json(&fs::read_to_string(&args.input)?)?;
    println!("✓ Loaded {}", args.input.display());

    if let Some(path) = &args.photo {
        request.record.personal_data.photo = Some(Photo { data: fs::read(path)?, mime_type: None });
        request.layout.show_photo = true;
    }

    let locale = match args.locale.as_str() {
        "de" => Locale::De,
        _ => Locale::En,
    };
    let generator = DocumentGenerator::builder().with_locale(locale).build();

    if args.all_templates {
        let stem = args.output.file_stem().and_then(|s| s.to_str()).unwrap_or("application");
        for kind in TemplateKind::ALL {
            let mut layout = request.layout.clone();
            layout.template = kind.id().into();
            let path = args.output.with_file_name(format!("{stem}-{kind}.pdf"));
            generator.generate_to_file(&request.record, &layout, &request.selection, &path)?;
            println!("✓ Generated {}", path.display());
        }
        return Ok(());
    }

    if let Some(template) = args.template {
        request.layout.template = template.as_str().into();
    }
    generator.generate_to_file(&request.record, &request.layout, &request.selection, &args.output)?;

    println!("\nSuccess! Generated {}", args.output.display());
    Ok(())
}
