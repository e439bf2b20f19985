//! Integration tests for the resume checker

use docx_rs::{Docx, Paragraph, Run};
use resume_checker::config::{Config, OutputFormat};
use resume_checker::input::{extract_text, InputManager, MediaType};
use resume_checker::output::{ReportGenerator, ResumeRecord};
use resume_checker::processing::keywords::TECHNICAL_VOCABULARY;
use resume_checker::processing::{ResumeAnalyzer, Role, RoleProfile, RoleTable};
use resume_checker::ResumeCheckerError;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

fn analyzer() -> ResumeAnalyzer {
    ResumeAnalyzer::new(Arc::new(RoleTable::new().unwrap())).unwrap()
}

fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
    let mut docx = Docx::new();
    for line in paragraphs {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*line)));
    }
    let mut buffer = Cursor::new(Vec::new());
    docx.build().pack(&mut buffer).unwrap();
    buffer.into_inner()
}

fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

fn sample_resume_lines() -> Vec<&'static str> {
    vec![
        "Jane Roe",
        "Summary",
        "DevOps engineer focused on cloud infrastructure and automation.",
        "Experience",
        "Built continuous integration pipelines with Jenkins and GitHub.",
        "Migrated services to Kubernetes and Docker on AWS using Terraform.",
        "Education",
        "BSc Computer Science",
        "Skills",
        "Linux, Ansible, Azure",
    ]
}

#[test]
fn test_developer_scenario() {
    let text = "I have experience with java, python, and docker. I led projects using kubernetes. \
                My education includes a CS degree. Skills: summary writing.";
    let assessment = analyzer().assess(text);

    assert_eq!(assessment.role, Role::SoftwareDeveloper);
    assert!(assessment.analysis.strengths.contains(&"Strong java skills".to_string()));
    assert!(assessment.analysis.strengths.contains(&"Strong python skills".to_string()));
    // 40 + 45 for sections, -10 for being under 500 characters, +4 for two skills
    assert_eq!(assessment.analysis.overall_score, 79);
}

#[test]
fn test_empty_text_yields_minimum_assessment() {
    let assessment = analyzer().assess("");
    let analysis = &assessment.analysis;

    assert_eq!(analysis.overall_score, 20);
    assert!(analysis.format_issues.iter().any(|i| i.contains("too short")));
    assert!(analysis.format_issues.iter().any(|i| i.contains("no line breaks")));
    assert_eq!(
        analysis.suggestions,
        vec![
            "Add a professional summary section",
            "Include specific achievements and metrics",
            "Add relevant certifications if any",
        ]
    );
}

#[test]
fn test_long_text_with_double_space() {
    let mut text = String::from("Experience in  logistics\n");
    while text.chars().count() < 2500 {
        text.push_str("Coordinated regional shipping schedules.\n");
    }
    let text: String = text.chars().take(2500).collect();

    let assessment = analyzer().assess(&text);
    assert_eq!(
        assessment.analysis.format_issues,
        vec!["Resume content is too long", "Multiple spaces detected - check formatting"]
    );
    assert_eq!(assessment.format_score, 70);
}

#[test]
fn test_degenerate_input_is_scored() {
    let analyzer = analyzer();
    let long_garbage = "\u{0}\u{fffd}  ".repeat(5000);

    for text in ["", " ", "\n\n\n", long_garbage.as_str()] {
        let assessment = analyzer.assess(text);
        let issues = assessment.analysis.format_issues.len() as u8;
        assert_eq!(assessment.role, Role::General);
        assert_eq!(assessment.format_score, 80 - 5 * issues);
    }
}

#[test]
fn test_overall_score_clamped_to_100() {
    let mut text = String::from(
        "Summary\nExperience\nEducation\nProject\n\
         Skills: java, python, javascript, sql, spring, react, angular, git\n",
    );
    while text.chars().count() <= 1100 {
        text.push_str("Shipped features for a payments platform.\n");
    }

    let assessment = analyzer().assess(&text);
    assert_eq!(assessment.role, Role::SoftwareDeveloper);
    // 40 + 45 for sections + 5 for length + 15 capped skill bonus = 105
    assert_eq!(assessment.analysis.overall_score, 100);
}

#[test]
fn test_ats_score_clamped_to_100() {
    let table = RoleTable::from_profiles(vec![RoleProfile::new(
        Role::DataScientist,
        &["bioinformatics"],
        TECHNICAL_VOCABULARY,
    )])
    .unwrap();
    let analyzer = ResumeAnalyzer::new(Arc::new(table)).unwrap();

    let text = format!(
        "bioinformatics summary, achievement, certification: {}",
        TECHNICAL_VOCABULARY.join(", ")
    );
    let assessment = analyzer.assess(&text);
    assert!(assessment.analysis.missing_keywords.is_empty());
    assert!(assessment.analysis.suggestions.is_empty());
    // 50 + 75 for 25 vocabulary skills - 6 for two format issues + 5 = 124
    assert_eq!(assessment.ats_score, 100);
}

#[test]
fn test_ats_score_clamped_to_0() {
    let skills: Vec<String> = (0..30).map(|i| format!("zzq-tool-{:02}", i)).collect();
    let skill_refs: Vec<&str> = skills.iter().map(String::as_str).collect();
    let table = RoleTable::from_profiles(vec![RoleProfile::new(
        Role::DevopsEngineer,
        &["bioinformatics"],
        &skill_refs,
    )])
    .unwrap();
    let analyzer = ResumeAnalyzer::new(Arc::new(table)).unwrap();

    let assessment = analyzer.assess("bioinformatics");
    assert_eq!(assessment.role, Role::DevopsEngineer);
    assert_eq!(assessment.analysis.missing_keywords.len(), 30);
    // 50 - 60 for absent skills - 6 for format issues - 30 for missing keywords
    assert_eq!(assessment.ats_score, 0);
    assert_eq!(assessment.analysis.overall_score, 20);
}

#[test]
fn test_custom_role_table() {
    let table = RoleTable::from_profiles(vec![RoleProfile::new(
        Role::DataScientist,
        &["bioinformatics"],
        &["python", "genomics"],
    )])
    .unwrap();
    let analyzer = ResumeAnalyzer::new(Arc::new(table)).unwrap();

    let assessment = analyzer.assess("bioinformatics research in genomics");
    assert_eq!(assessment.role, Role::DataScientist);
    assert_eq!(assessment.analysis.missing_keywords, vec!["python"]);
    assert_eq!(assessment.analysis.suggested_keywords, vec!["python", "genomics"]);
}

#[test]
fn test_extract_text_rejects_unsupported_types() {
    for media_type in ["text/plain", "application/msword", "image/png", ""] {
        let err = extract_text(b"Jane Roe", media_type).unwrap_err();
        assert!(matches!(err, ResumeCheckerError::UnsupportedFormat(_)));
    }
}

#[tokio::test]
async fn test_docx_upload_end_to_end() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "jane_roe.docx", &docx_bytes(&sample_resume_lines()));

    let mut manager = InputManager::new();
    let upload = manager.load(&path, None).await.unwrap();
    assert_eq!(upload.media_type, MediaType::Docx);
    assert!(upload.text.contains("Kubernetes and Docker"));

    let assessment = analyzer().assess(&upload.text);
    assert_eq!(assessment.role, Role::DevopsEngineer);
    assert!(assessment.analysis.missing_keywords.contains(&"ci/cd".to_string()));

    let record = ResumeRecord::new(upload, assessment);
    assert_eq!(record.file_name, "jane_roe.docx");

    let json = ReportGenerator::with_options(false, false, false, false)
        .generate_report(&record, &OutputFormat::Json)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["suggestedRole"], "DEVOPS_ENGINEER");
    assert_eq!(value["fileType"], DOCX_MIME);
}

#[tokio::test]
async fn test_declared_media_type_overrides_extension() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "upload.bin", &docx_bytes(&["Summary", "Python developer"]));

    let mut manager = InputManager::new();
    assert!(manager.load(&path, None).await.is_err());

    let upload = manager.load(&path, Some(MediaType::Docx)).await.unwrap();
    assert!(upload.text.contains("Python developer"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "cv.docx", &docx_bytes(&["Experience"]));

    let mut manager = InputManager::new();
    let first = manager.extract_text(&path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let second = manager.extract_text(&path).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "resume.txt", b"Experience\nEducation");

    let mut manager = InputManager::new();
    let err = manager.load(&path, None).await.unwrap_err();
    assert!(matches!(err, ResumeCheckerError::UnsupportedFormat(_)));
}

#[tokio::test]
async fn test_corrupt_docx_is_extraction_failure() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "broken.docx", b"definitely not a zip");

    let mut manager = InputManager::new();
    let err = manager.load(&path, None).await.unwrap_err();
    assert!(err.is_extraction_failure());
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let result = manager.load(Path::new("tests/fixtures/nonexistent.pdf"), None).await;
    assert!(matches!(result, Err(ResumeCheckerError::InvalidInput(_))));
}

#[tokio::test]
async fn test_file_size_limit() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "huge.pdf", &vec![b'%'; 2048]);

    let mut config = Config::default();
    config.input.max_file_size_bytes = 1024;
    let mut manager = InputManager::from_config(&config.input);

    let err = manager.load(&path, None).await.unwrap_err();
    assert!(matches!(err, ResumeCheckerError::InvalidInput(_)));
}
