//! Application document generation benchmarks
//!
//! Measures layout alone and the full render per template, and how the CV
//! scales with the length of the work history.

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use dossier::{ApplicationRecord, DocumentGenerator, DocumentSelection, LayoutConfig, TemplateKind};
use serde_json::json;
use std::hint::black_box;

fn record(jobs: usize) -> ApplicationRecord {
    let experience: Vec<_> = (0..jobs)
        .map(|i| {
            json!({
                "company": format!("Company {}", i),
                "jobTitle": "Software Engineer",
                "startDate": "2015-01",
                "endDate": "2016-12",
                "description": "- Built services\n- Reviewed code\n- Mentored colleagues"
            })
        })
        .collect();
    serde_json::from_value(json!({
        "personalData": {
            "firstName": "Erika", "lastName": "Mustermann",
            "email": "erika@example.com", "phone": "+49 30 1234567",
            "street": "Musterstrasse 1", "zipCode": "10115", "city": "Berlin"
        },
        "workExperience": experience,
        "education": [{ "institution": "TU Berlin", "degree": "M.Sc.", "fieldOfStudy": "Computer Science",
                        "startDate": "2010-10", "endDate": "2014-09" }],
        "skills": [
            { "name": "Rust", "level": 5 }, { "name": "TypeScript", "level": 4 },
            { "name": "React", "level": 3 }, { "name": "PostgreSQL", "level": 4 },
            { "name": "Kubernetes", "level": 3 }, { "name": "Terraform", "level": 2 }
        ],
        "languages": [{ "name": "German", "level": "native" }, { "name": "English", "level": "C1" }],
        "projects": [{ "name": "ledger-rs", "description": "Bookkeeping library.", "technologies": ["Rust"] }],
        "coverLetter": { "mode": "text", "introduction": "Hello.", "body": "I build things.", "closing": "Thanks." },
        "jobPosting": { "company": "Globex", "jobTitle": "Platform Engineer", "contactPerson": "Hank Scorpio" }
    }))
    .expect("valid benchmark record")
}

fn generator() -> DocumentGenerator {
    DocumentGenerator::builder()
        .with_letter_date(NaiveDate::from_ymd_opt(2026, 1, 15).expect("valid date"))
        .with_timestamp(false)
        .build()
}

fn benchmark_templates(c: &mut Criterion) {
    let mut group = c.benchmark_group("template_render");
    let record = record(5);
    let generator = generator();

    for kind in TemplateKind::ALL {
        let layout = LayoutConfig::default().with_template(kind.id());
        group.bench_with_input(BenchmarkId::new("layout", kind.id()), &layout, |b, layout| {
            b.iter(|| {
                generator
                    .layout_document(black_box(&record), layout, &DocumentSelection::all())
                    .expect("Failed to lay out document")
            });
        });
        group.bench_with_input(BenchmarkId::new("pdf", kind.id()), &layout, |b, layout| {
            b.iter(|| {
                generator
                    .generate(black_box(&record), layout, &DocumentSelection::all())
                    .expect("Failed to generate PDF")
            });
        });
    }

    group.finish();
}

fn benchmark_history_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("work_history_length");
    let generator = generator();
    let layout = LayoutConfig::default();

    for jobs in [1, 10, 50] {
        let record = record(jobs);
        group.bench_with_input(BenchmarkId::new("jobs", jobs), &record, |b, record| {
            b.iter(|| {
                generator
                    .generate(black_box(record), &layout, &DocumentSelection::cv_only())
                    .expect("Failed to generate PDF")
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_templates, benchmark_history_length);
criterion_main!(benches);
