// Integration tests for accord
use accord_core::{Category, PerfumeCatalog, PerfumeRecord};
use accord_dataprep::{
    clean_records, extract_note_vocabulary, read_perfume_table, tag_perfumes,
    write_perfume_table,
};
use accord_embed::{CategoryVectors, HashEmbedder};
use accord_similarity::{BlendConfig, CategoryStrategy, CompatibilityScorer, NOT_FOUND_MESSAGE};

fn raw_records() -> Vec<PerfumeRecord> {
    vec![
        PerfumeRecord::new(
            "Carolina Herrera",
            "Good Girl",
            vec![
                "Tuberose ".to_string(),
                "jasmine".to_string(),
                "cacao".to_string(),
                "tonka bean".to_string(),
            ],
        ),
        PerfumeRecord::new(
            "Avon",
            "Incandessence",
            vec!["rose".to_string(), "amber".to_string(), "vanilla".to_string()],
        ),
        PerfumeRecord::new(
            "Acqua di Parma",
            "Blu Mediterraneo",
            vec![
                "bergamot".to_string(),
                "lemon".to_string(),
                "cedar".to_string(),
            ],
        ),
        // Duplicate of the first row, dropped by cleaning
        PerfumeRecord::new(
            "Carolina Herrera",
            "Good Girl",
            vec![
                "tuberose".to_string(),
                "jasmine".to_string(),
                "cacao".to_string(),
                "tonka bean".to_string(),
            ],
        ),
        // No name, dropped by cleaning
        PerfumeRecord::new("Nameless", "", vec!["rose".to_string()]),
    ]
}

fn prepared_catalog() -> PerfumeCatalog {
    let embedder = HashEmbedder::default();
    let vectors = CategoryVectors::from_exemplars(&embedder);
    let (mut records, _) = clean_records(raw_records());
    tag_perfumes(&embedder, &vectors, &mut records).unwrap();
    PerfumeCatalog::from_records(records)
}

#[test]
fn test_pipeline_cleans_and_tags() {
    let catalog = prepared_catalog();
    assert_eq!(catalog.len(), 3);
    for record in catalog.iter() {
        assert_eq!(record.top_categories.len(), 3);
        for tag in &record.top_categories {
            assert!((0.0..=1.0).contains(&tag.score));
        }
    }
}

#[test]
fn test_vocabulary_collapses_case_variants() {
    let (records, _) = clean_records(raw_records());
    let vocabulary = extract_note_vocabulary(&records);
    assert!(vocabulary.contains(&"tuberose".to_string()));
    assert_eq!(
        vocabulary.iter().filter(|n| n.as_str() == "tuberose").count(),
        1
    );
    // Sorted and deduplicated
    let mut sorted = vocabulary.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(vocabulary, sorted);
}

#[test]
fn test_query_end_to_end() {
    let scorer = CompatibilityScorer::new(HashEmbedder::default(), prepared_catalog());
    let message = scorer.query("Carolina Herrera", "Good Girl", "Avon", "Incandessence");
    assert!(message.starts_with("Good Girl by Carolina Herrera and Incandessence by Avon are "));
    assert!(message.ends_with("% compatible."));
}

#[test]
fn test_query_symmetry_both_strategies() {
    for strategy in [CategoryStrategy::VectorCosine, CategoryStrategy::MatrixWeighted] {
        let scorer = CompatibilityScorer::with_config(
            HashEmbedder::default(),
            prepared_catalog(),
            BlendConfig::balanced().with_strategy(strategy),
        )
        .unwrap();

        let ab = scorer
            .score_by_name("Carolina Herrera", "Good Girl", "Avon", "Incandessence")
            .unwrap();
        let ba = scorer
            .score_by_name("Avon", "Incandessence", "Carolina Herrera", "Good Girl")
            .unwrap();
        assert_eq!(ab, ba);
    }
}

#[test]
fn test_query_not_found() {
    let scorer = CompatibilityScorer::new(HashEmbedder::default(), prepared_catalog());
    assert_eq!(
        scorer.query("Dior", "Sauvage", "Avon", "Incandessence"),
        NOT_FOUND_MESSAGE
    );
}

#[test]
fn test_note_biased_blend_changes_score() {
    let catalog = prepared_catalog();
    let balanced =
        CompatibilityScorer::new(HashEmbedder::default(), catalog.clone());
    let biased = CompatibilityScorer::with_config(
        HashEmbedder::default(),
        catalog,
        BlendConfig::note_biased(),
    )
    .unwrap();

    let a = balanced
        .score_by_name("Carolina Herrera", "Good Girl", "Acqua di Parma", "Blu Mediterraneo")
        .unwrap();
    let b = biased
        .score_by_name("Carolina Herrera", "Good Girl", "Acqua di Parma", "Blu Mediterraneo")
        .unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_table_roundtrip_preserves_tags() {
    let catalog = prepared_catalog();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tagged.csv");

    write_perfume_table(&path, catalog.records()).unwrap();
    let reloaded = read_perfume_table(&path).unwrap();
    assert_eq!(reloaded, catalog.records());
}

#[test]
fn test_scores_match_across_table_roundtrip() {
    let catalog = prepared_catalog();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tagged.csv");
    write_perfume_table(&path, catalog.records()).unwrap();

    let reloaded = PerfumeCatalog::from_records(read_perfume_table(&path).unwrap());
    let before = CompatibilityScorer::new(HashEmbedder::default(), catalog);
    let after = CompatibilityScorer::new(HashEmbedder::default(), reloaded);

    let a = before
        .score_by_name("Carolina Herrera", "Good Girl", "Avon", "Incandessence")
        .unwrap();
    let b = after
        .score_by_name("Carolina Herrera", "Good Girl", "Avon", "Incandessence")
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_self_score_is_100() {
    let scorer = CompatibilityScorer::new(HashEmbedder::default(), prepared_catalog());
    let score = scorer
        .score_by_name("Avon", "Incandessence", "Avon", "Incandessence")
        .unwrap();
    assert_eq!(score, 100.0);
}

#[test]
fn test_categorization_places_obvious_notes() {
    let embedder = HashEmbedder::default();
    let vectors = CategoryVectors::from_exemplars(&embedder);
    let notes = vec!["lemon".to_string(), "rose".to_string(), "cedar".to_string()];
    let assignments = accord_dataprep::assign_categories(&embedder, &vectors, &notes);
    assert_eq!(assignments[0].1, Category::Citrus);
    assert_eq!(assignments[1].1, Category::Floral);
    assert_eq!(assignments[2].1, Category::Woody);
}
