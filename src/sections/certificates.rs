use super::{SectionContext, SectionRenderer};
use crate::locale::Labels;
use crate::model::{Certificate, non_empty, non_empty_opt};
use dossier_layout::{Block, EntryBlock};

#[derive(Debug, Clone, Copy, Default)]
pub struct CertificatesSection;

impl SectionRenderer for CertificatesSection {
    type Item = Certificate;

    fn title(&self, labels: &'static Labels) -> &'static str {
        labels.certificates
    }

    fn entries(&self, items: &[Certificate], ctx: &SectionContext<'_>) -> Vec<Block> {
        let style = ctx.style;
        let labels = ctx.labels();
        items
            .iter()
            .filter_map(|cert| {
                let name = non_empty(&cert.name)?;
                let issued = non_empty(&cert.issue_date).map(|d| ctx.locale.format_date(d));
                let expiry = non_empty_opt(&cert.expiry_date)
                    .map(|d| format!("{} {}", labels.valid_until, ctx.locale.format_date(d)));
                let date = match (issued, expiry) {
                    (Some(i), Some(e)) => Some(format!("{i}, {e}")),
                    (i, e) => i.or(e),
                };
                Some(Block::Entry(EntryBlock {
                    title: name.to_string(),
                    subtitle: non_empty(&cert.issuer).map(str::to_string),
                    date,
                    description: non_empty_opt(&cert.credential_id).map(|id| format!("{}: {id}", labels.credential)),
                    bullets: Vec::new(),
                    title_style: style.entry_title(),
                    subtitle_style: style.subtitle(),
                    date_style: style.caption(),
                    body_style: style.small(),
                    date_placement: ctx.hints.date_placement,
                    space_after: ctx.hints.space_between_entries * 0.75,
                }))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use crate::sections::SectionHints;
    use crate::sections::test_support::{style, texts};

    #[test]
    fn empty_certificates_emit_nothing() {
        let hints = SectionHints::default();
        let ctx = SectionContext::new(style(), Locale::En, &hints);
        assert!(CertificatesSection.render(&[], &ctx).is_empty());
    }

    #[test]
    fn certificate_lines() {
        let hints = SectionHints::default();
        let ctx = SectionContext::new(style(), Locale::En, &hints);
        let cert = Certificate {
            name: "CKA".into(),
            issuer: "CNCF".into(),
            issue_date: "2023-04".into(),
            expiry_date: Some("2026-04".into()),
            credential_id: Some("LF-123".into()),
        };
        let texts = texts(&CertificatesSection.render(&[cert], &ctx));
        assert_eq!(texts, vec!["Certificates", "CKA", "04/2023, valid until 04/2026", "CNCF", "Credential: LF-123"]);
    }
}
