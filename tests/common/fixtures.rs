use dossier::model::{
    Certificate, CoverLetter, CoverLetterMeta, Education, JobPosting, Language, PersonalData, Photo, PostalAddress,
    Project, Skill, WorkExperience,
};
use dossier::ApplicationRecord;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

/// One current job at Acme and nothing else.
pub fn acme_record() -> ApplicationRecord {
    ApplicationRecord {
        work_experience: vec![WorkExperience {
            company: "Acme GmbH".into(),
            job_title: "Developer".into(),
            start_date: "2020-01".into(),
            is_current_job: true,
            ..Default::default()
        }],
        ..Default::default()
    }
}

pub fn personal_data() -> PersonalData {
    PersonalData {
        first_name: "Erika".into(),
        last_name: "Mustermann".into(),
        email: "erika@example.com".into(),
        phone: "+49 30 1234567".into(),
        address: PostalAddress {
            street: "Musterstrasse 1".into(),
            zip_code: "10115".into(),
            city: "Berlin".into(),
            country: "Germany".into(),
        },
        nationality: Some("German".into()),
        github: Some("github.com/erika".into()),
        ..Default::default()
    }
}

/// Every collection filled, plus a text cover letter and a job posting.
pub fn full_record() -> ApplicationRecord {
    ApplicationRecord {
        personal_data: personal_data(),
        work_experience: vec![
            WorkExperience {
                company: "Acme GmbH".into(),
                job_title: "Senior Developer".into(),
                location: Some("Berlin".into()),
                start_date: "2021-04".into(),
                is_current_job: true,
                description: "- Designed the billing service\n- Mentored two juniors".into(),
                ..Default::default()
            },
            WorkExperience {
                company: "Initech".into(),
                job_title: "Developer".into(),
                start_date: "2017-09".into(),
                end_date: "2021-03".into(),
                description: "Maintained the reporting pipeline".into(),
                ..Default::default()
            },
        ],
        education: vec![Education {
            institution: "TU Berlin".into(),
            degree: "M.Sc.".into(),
            field_of_study: "Computer Science".into(),
            start_date: "2015-10".into(),
            end_date: "2017-08".into(),
            grade: Some("1.3".into()),
            ..Default::default()
        }],
        skills: vec![
            Skill { name: "Rust".into(), category: "Languages".into(), level: 5 },
            Skill { name: "React".into(), category: "Frontend".into(), level: 3 },
            Skill { name: "PostgreSQL".into(), category: "Backend".into(), level: 4 },
            Skill { name: "Kubernetes".into(), category: "Ops".into(), level: 2 },
            Skill { name: "Negotiation".into(), category: String::new(), level: 9 },
        ],
        languages: vec![
            Language { name: "German".into(), level: "native".into() },
            Language { name: "English".into(), level: "C1".into() },
        ],
        certificates: vec![Certificate {
            name: "CKA".into(),
            issuer: "CNCF".into(),
            issue_date: "2023-04".into(),
            expiry_date: Some("2026-04".into()),
            credential_id: Some("LF-123".into()),
        }],
        projects: vec![Project {
            name: "ledger-rs".into(),
            description: "Double-entry bookkeeping library.".into(),
            start_date: "2022-01".into(),
            technologies: vec!["Rust".into(), "SQLite".into()],
            url: Some("github.com/erika/ledger-rs".into()),
            ..Default::default()
        }],
        cover_letter: Some(CoverLetter::text(
            "I am applying for the platform role.",
            "I have built billing systems for four years.\n\nI enjoy mentoring.",
            "I look forward to hearing from you.",
        )),
        cover_letter_meta: Some(CoverLetterMeta {
            earliest_start_date: Some("2026-06-01".into()),
            salary_expectation: Some("80,000 EUR".into()),
            notice_period: None,
        }),
        job_posting: Some(JobPosting {
            company: "Globex".into(),
            contact_person: Some("Hank Scorpio".into()),
            job_title: "Platform Engineer".into(),
            reference_number: Some("PE-42".into()),
            address: Some(PostalAddress {
                street: "1 Cypress Creek".into(),
                zip_code: "12345".into(),
                city: "Springfield".into(),
                country: String::new(),
            }),
        }),
    }
}

/// Enough experience entries to overflow one page in every template.
pub fn long_record() -> ApplicationRecord {
    let mut record = full_record();
    record.work_experience = (0..30)
        .map(|i| WorkExperience {
            company: format!("Company {i}"),
            job_title: "Engineer".into(),
            start_date: "2010-01".into(),
            end_date: "2011-01".into(),
            description: "- Shipped features\n- Fixed bugs\n- Reviewed code\n- Wrote documentation".into(),
            ..Default::default()
        })
        .collect();
    record
}

/// A small valid PNG.
pub fn png_photo() -> Photo {
    let image = RgbImage::from_pixel(16, 16, Rgb([180, 90, 40]));
    let mut data = Vec::new();
    DynamicImage::ImageRgb8(image)
        .write_to(&mut Cursor::new(&mut data), ImageFormat::Png)
        .unwrap();
    Photo { data, mime_type: Some("image/png".into()) }
}

/// Bytes that no decoder accepts.
pub fn garbage_photo() -> Photo {
    Photo { data: b"definitely not an image".to_vec(), mime_type: Some("image/jpeg".into()) }
}
