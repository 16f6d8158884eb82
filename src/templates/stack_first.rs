//! Tech-stack-first CV: skills grouped into stack buckets lead, followed by
//! projects, then the usual history.

use super::{CvInput, body_column, single_column};
use crate::locale::Labels;
use crate::model::{Skill, non_empty};
use crate::sections::{
    CertificatesSection, EducationSection, ExperienceSection, HeaderOptions, HeadingTreatment,
    LanguagesSection, ProjectsSection, SectionContext, SectionHints, SectionRenderer, group_label,
    header_blocks,
};
use dossier_layout::{BadgesBlock, Block, ImageShape, PageSequence, RuleBlock, Stroke};
use dossier_style::Margins;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Where a skill lands in the stack overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StackBucket {
    Languages,
    Frontend,
    Backend,
    Infrastructure,
    Other,
}

impl StackBucket {
    pub const ALL: [StackBucket; 5] = [
        StackBucket::Languages,
        StackBucket::Frontend,
        StackBucket::Backend,
        StackBucket::Infrastructure,
        StackBucket::Other,
    ];

    pub fn label(&self, labels: &'static Labels) -> &'static str {
        match self {
            StackBucket::Languages => labels.bucket_languages,
            StackBucket::Frontend => labels.bucket_frontend,
            StackBucket::Backend => labels.bucket_backend,
            StackBucket::Infrastructure => labels.bucket_infrastructure,
            StackBucket::Other => labels.bucket_other,
        }
    }
}

const BUCKET_KEYWORDS: [(StackBucket, &[&str]); 4] = [
    (
        StackBucket::Languages,
        &[
            "rust", "go", "golang", "python", "java", "kotlin", "scala", "javascript", "typescript", "c",
            "c++", "c#", "ruby", "php", "swift", "elixir", "erlang", "haskell", "clojure", "ocaml", "zig",
            "dart", "lua", "r", "bash", "sql", "node", "node.js", "nodejs", "deno", "bun", ".net", "dotnet",
            "jvm", "wasm", "webassembly",
        ],
    ),
    (
        StackBucket::Frontend,
        &[
            "react", "vue", "vue.js", "angular", "svelte", "next.js", "nextjs", "nuxt", "remix", "astro",
            "solid", "html", "css", "sass", "scss", "less", "tailwind", "tailwindcss", "bootstrap",
            "webpack", "vite", "redux", "jquery", "storybook", "figma", "flutter",
        ],
    ),
    (
        StackBucket::Backend,
        &[
            "django", "flask", "fastapi", "spring", "express", "nestjs", "rails", "laravel", "symfony",
            "asp.net", "actix", "axum", "tokio", "graphql", "grpc", "rest", "postgres", "postgresql",
            "mysql", "mariadb", "sqlite", "mongodb", "redis", "kafka", "rabbitmq", "elasticsearch",
            "hibernate", "celery",
        ],
    ),
    (
        StackBucket::Infrastructure,
        &[
            "docker", "podman", "kubernetes", "k8s", "helm", "terraform", "pulumi", "ansible", "aws",
            "gcp", "azure", "linux", "nginx", "jenkins", "ci/cd", "github actions", "gitlab", "gitlab ci",
            "argocd", "prometheus", "grafana", "openshift", "vagrant",
        ],
    ),
];

/// Keyword to bucket. A keyword belongs to exactly one bucket.
static KEYWORD_TABLE: Lazy<HashMap<&'static str, StackBucket>> = Lazy::new(|| {
    BUCKET_KEYWORDS
        .iter()
        .flat_map(|(bucket, words)| words.iter().map(move |w| (*w, *bucket)))
        .collect()
});

/// Classifies a skill by name. The whole name is looked up first, then its
/// tokens in order; names matching nothing fall into [`StackBucket::Other`].
pub fn classify_skill(name: &str) -> StackBucket {
    let name = name.trim().to_lowercase();
    if let Some(bucket) = KEYWORD_TABLE.get(name.as_str()) {
        return *bucket;
    }
    name.split(|c: char| c.is_whitespace() || matches!(c, '/' | ',' | '(' | ')'))
        .filter(|token| !token.is_empty())
        .find_map(|token| KEYWORD_TABLE.get(token).copied())
        .unwrap_or(StackBucket::Other)
}

/// Skills grouped into labelled stack buckets, each a row of badges.
#[derive(Debug, Clone, Copy, Default)]
pub struct StackSection;

impl SectionRenderer for StackSection {
    type Item = Skill;

    fn title(&self, labels: &'static Labels) -> &'static str {
        labels.tech_stack
    }

    fn entries(&self, items: &[Skill], ctx: &SectionContext<'_>) -> Vec<Block> {
        let mut blocks = Vec::new();
        for bucket in StackBucket::ALL {
            let names: Vec<String> = items
                .iter()
                .filter_map(|s| non_empty(&s.name))
                .filter(|name| classify_skill(name) == bucket)
                .map(str::to_string)
                .collect();
            if names.is_empty() {
                continue;
            }
            blocks.push(group_label(bucket.label(ctx.labels()), ctx));
            blocks.push(Block::Badges(BadgesBlock {
                items: names,
                style: ctx.style.small(),
                fill: ctx.style.palette.badge.clone(),
                padding: 3.0,
                gap: 4.0,
                space_after: 4.0,
            }));
        }
        blocks
    }
}

pub(super) fn render(input: &CvInput<'_>) -> PageSequence {
    let hints = SectionHints {
        heading: HeadingTreatment::Plain,
        tech_badges: true,
        ..Default::default()
    };
    let ctx = SectionContext::new(input.style, input.locale, &hints);
    let record = input.record;

    let options = HeaderOptions {
        header_style: input.header_style,
        photo: input.photo_slot(64.0, ImageShape::Square),
        headline: input.headline(),
        space_after: 4.0,
        ..Default::default()
    };
    let mut blocks = header_blocks(&record.personal_data, &ctx, &options);
    if !blocks.is_empty() {
        blocks.push(Block::Rule(RuleBlock {
            stroke: Stroke::new(input.style.palette.muted.clone(), 0.75),
            space_before: 0.0,
            space_after: 2.0,
        }));
    }
    blocks.extend(
        [
            StackSection.render(&record.skills, &ctx),
            ProjectsSection.render(&record.projects, &ctx),
            ExperienceSection::default().render(&record.work_experience, &ctx),
            EducationSection.render(&record.education, &ctx),
            CertificatesSection.render(&record.certificates, &ctx),
            LanguagesSection.render(&record.languages, &ctx),
        ]
        .concat(),
    );
    single_column(body_column(Margins::from_mm(18.0, 20.0, 20.0, 20.0)), &blocks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_classify_by_keyword() {
        assert_eq!(classify_skill("Rust"), StackBucket::Languages);
        assert_eq!(classify_skill("React Native"), StackBucket::Frontend);
        assert_eq!(classify_skill("Spring Boot"), StackBucket::Backend);
        assert_eq!(classify_skill("GitHub Actions"), StackBucket::Infrastructure);
        assert_eq!(classify_skill("CI/CD"), StackBucket::Infrastructure);
        assert_eq!(classify_skill("AWS (Lambda, S3)"), StackBucket::Infrastructure);
    }

    #[test]
    fn unmatched_names_go_to_other() {
        assert_eq!(classify_skill("Scrum"), StackBucket::Other);
        assert_eq!(classify_skill(""), StackBucket::Other);
    }

    #[test]
    fn classification_is_stable() {
        for name in ["TypeScript", "Kubernetes", "Team Lead", "Go"] {
            let first = classify_skill(name);
            assert!((0..10).all(|_| classify_skill(name) == first));
        }
    }

    #[test]
    fn keywords_are_unique_across_buckets() {
        let total: usize = BUCKET_KEYWORDS.iter().map(|(_, words)| words.len()).sum();
        assert_eq!(KEYWORD_TABLE.len(), total);
    }

    #[test]
    fn every_skill_lands_in_one_bucket() {
        use crate::locale::Locale;
        use crate::sections::test_support::{style, texts};
        let hints = SectionHints::default();
        let ctx = SectionContext::new(style(), Locale::En, &hints);
        let skills: Vec<Skill> = ["Rust", "Vue", "Kafka", "Docker", "Scrum"]
            .into_iter()
            .map(|n| Skill { name: n.into(), level: 3, ..Default::default() })
            .collect();
        let texts = texts(&StackSection.render(&skills, &ctx));
        assert_eq!(
            texts,
            vec![
                "Tech Stack", "Languages & Runtimes", "Rust", "Frontend", "Vue", "Backend", "Kafka",
                "Infrastructure", "Docker", "Other", "Scrum",
            ]
        );
    }
}
