    use std::time::{Duration, Instant};

    use super::*;

    const SAMPLE: &str = r#"{
        "basics": { "name": "Ada Lovelace", "label": "Analyst" },
        "skills": [{ "name": "Rust", "keywords": ["tokio", "serde"] }]
    }"#;

    fn write(dir: &tempfile::TempDir, name: &str, body: &str) -> ContentSource {
        let path = dir.path().join(name);
        std::fs::write(&path, body).expect("write fixture");
        ContentSource::Local(path)
    }

    #[test]
    fn parse_distinguishes_urls_from_paths() {
        assert_eq!(
            ContentSource::parse("https://example.com/r.json"),
            ContentSource::Remote("https://example.com/r.json".to_string())
        );
        assert_eq!(
            ContentSource::parse(" HTTP://localhost:8080/r.json "),
            ContentSource::Remote("HTTP://localhost:8080/r.json".to_string())
        );
        assert_eq!(
            ContentSource::parse("public/resume.json"),
            ContentSource::Local(PathBuf::from("public/resume.json"))
        );
    }

    #[test]
    fn primary_wins_when_it_loads() {
        let dir = tempfile::tempdir().expect("tempdir");
        let primary = write(&dir, "a.json", SAMPLE);
        let fallback = write(&dir, "b.json", r#"{"basics":{"name":"Other"}}"#);
        let provider = ContentProvider::new(Some(primary), Some(fallback)).expect("provider");
        match provider.load() {
            ContentState::Ready { record, origin } => {
                assert_eq!(origin, ContentOrigin::Primary);
                assert_eq!(record.basics.name.as_deref(), Some("Ada Lovelace"));
                assert_eq!(record.skills[0].keywords, vec!["tokio", "serde"]);
            }
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn malformed_primary_falls_through_to_fallback() {
        let dir = tempfile::tempdir().expect("tempdir");
        let primary = write(&dir, "a.json", "{ not json");
        let fallback = write(&dir, "b.json", SAMPLE);
        let provider = ContentProvider::new(Some(primary), Some(fallback)).expect("provider");
        let state = provider.load();
        assert!(matches!(
            state,
            ContentState::Ready {
                origin: ContentOrigin::Fallback,
                ..
            }
        ));
    }

    #[test]
    fn both_missing_is_unavailable() {
        let dir = tempfile::tempdir().expect("tempdir");
        let provider = ContentProvider::new(
            Some(ContentSource::Local(dir.path().join("missing-a.json"))),
            Some(ContentSource::Local(dir.path().join("missing-b.json"))),
        )
        .expect("provider");
        assert_eq!(provider.load(), ContentState::Unavailable);

        let offline = ContentProvider::new(None, None).expect("provider");
        assert_eq!(offline.load(), ContentState::Unavailable);
    }

    #[test]
    fn fetch_reports_the_failing_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("nope.json");
        let provider = ContentProvider::new(None, None).expect("provider");
        let err = provider
            .fetch(&ContentSource::Local(missing.clone()))
            .unwrap_err();
        assert!(format!("{:#}", err).contains(&missing.display().to_string()));
    }

    #[test]
    fn loader_settles_once() {
        let dir = tempfile::tempdir().expect("tempdir");
        let primary = write(&dir, "a.json", SAMPLE);
        let provider = ContentProvider::new(Some(primary), None).expect("provider");
        let mut loader = spawn_load(provider);

        let start = Instant::now();
        let state = loop {
            if let Some(state) = loader.poll() {
                break state;
            }
            assert!(start.elapsed() < Duration::from_secs(5), "loader never settled");
            std::thread::sleep(Duration::from_millis(5));
        };
        assert!(state.record().is_some());
        assert!(!loader.is_pending());
        assert_eq!(loader.poll(), None);
    }
