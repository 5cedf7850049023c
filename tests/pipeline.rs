use std::fs;
use std::path::Path;

use deutschkurs::cache::{AnnotationRecord, WordCache};
use deutschkurs::error::Error;
use deutschkurs::layout::Layout;
use deutschkurs::pipelines::{Deutschkurs, Pipeline};
use deutschkurs::writing::adoc::END_OF_HEADER;
use tempfile::tempdir;

fn write_topic(root: &Path, topic: &str, files: &[(&str, &str)]) {
    let dir = root.join("userdata").join(topic);
    fs::create_dir_all(&dir).unwrap();
    for (name, text) in files {
        fs::write(dir.join(name), text).unwrap();
    }
}

fn doc(root: &Path, key: &str) -> String {
    fs::read_to_string(root.join("docs").join(format!("{key}.adoc"))).unwrap()
}

#[test]
fn liebe_eltern() {
    let root = tempdir().unwrap();
    write_topic(root.path(), "grundschule", &[("info.txt", "Liebe Eltern.")]);

    let report = Deutschkurs::new(root.path(), None).run().unwrap();
    assert_eq!(report.topics, 1);
    assert_eq!(report.documents, 1);
    assert_eq!(report.stats.inserted, 2);
    assert_eq!(report.written, 2);

    let cache = WordCache::load(&Layout::new(root.path()).cache_file());
    assert_eq!(cache.keys().collect::<Vec<_>>(), vec!["eltern", "liebe"]);

    let eltern = doc(root.path(), "eltern");
    assert!(eltern.starts_with("= Eltern\n\n"));
    for property in [":Part Of Speech:\t\t", ":Lema:\t\t", ":Prefix:\t\t", ":Suffix:\t\t"] {
        assert!(eltern.contains(property));
    }
    assert!(eltern.contains(END_OF_HEADER));
    assert!(eltern.ends_with("Its lema is _Eltern_."));

    let docs: Vec<_> = fs::read_dir(root.path().join("docs")).unwrap().collect();
    assert_eq!(docs.len(), 2);
}

#[test]
fn cached_word_is_reused() {
    let root = tempdir().unwrap();
    let layout = Layout::new(root.path());
    write_topic(root.path(), "grundschule", &[("info.txt", "Liebe Eltern.")]);
    layout.ensure().unwrap();

    let liebe = AnnotationRecord {
        word: "liebe".to_string(),
        pos: "adjective, attributive".to_string(),
        lemma: "lieb".to_string(),
        prefix: "L".to_string(),
        suffix: "ebe".to_string(),
    };
    let mut cache = WordCache::new();
    cache.put("liebe".to_string(), liebe.clone());
    cache.save(&layout.cache_file()).unwrap();

    let report = Deutschkurs::new(root.path(), None).run().unwrap();
    assert_eq!(report.cached_before, 1);
    assert_eq!(report.stats.inserted, 1);
    assert_eq!(report.stats.reused, 1);

    let cache = WordCache::load(&layout.cache_file());
    assert_eq!(cache.get("liebe"), Some(&liebe));
    assert!(doc(root.path(), "liebe").contains(":Lema:\t\tlieb\n"));
}

#[test]
fn corrupt_cache_is_not_fatal() {
    let root = tempdir().unwrap();
    let layout = Layout::new(root.path());
    write_topic(root.path(), "arbeit", &[("mail.txt", "Guten Morgen!")]);
    layout.ensure().unwrap();
    fs::write(layout.cache_file(), "{ not json").unwrap();

    let report = Deutschkurs::new(root.path(), None).run().unwrap();
    assert_eq!(report.cached_before, 0);
    assert_eq!(report.cached_after, 2);
}

#[test]
fn first_run_then_rerun() {
    let root = tempdir().unwrap();
    let pipeline = Deutschkurs::new(root.path(), None);

    // seeds userdata with the example topic
    let first = pipeline.run().unwrap();
    assert_eq!(first.topics, 1);
    assert!(first.cached_after > 0);
    assert!(!root.path().join("docs").join("..adoc").exists());
    let grusse = doc(root.path(), "grüße");

    let second = pipeline.run().unwrap();
    assert_eq!(second.stats.inserted, 0);
    assert_eq!(second.cached_before, first.cached_after);
    assert_eq!(second.cached_after, first.cached_after);
    assert_eq!(doc(root.path(), "grüße"), grusse);
}

#[test]
fn first_seen_wins_across_topics() {
    let root = tempdir().unwrap();
    // topics are processed in name order: "a-kueche" before "b-abend"
    write_topic(root.path(), "a-kueche", &[("1.txt", "Das Essen ist gut.")]);
    write_topic(root.path(), "b-abend", &[("1.txt", "Wir essen Brot.")]);

    Deutschkurs::new(root.path(), None).run().unwrap();

    let cache = WordCache::load(&Layout::new(root.path()).cache_file());
    assert_eq!(cache.get("essen").unwrap().word, "Essen");
    assert!(doc(root.path(), "essen").starts_with("= Essen\n"));
}

#[test]
fn stray_files_are_skipped() {
    let root = tempdir().unwrap();
    write_topic(root.path(), "grundschule", &[("info.txt", "Liebe Eltern.")]);
    fs::write(root.path().join("userdata").join("notes.txt"), "Hallo Welt.").unwrap();

    let report = Deutschkurs::new(root.path(), None).run().unwrap();
    assert_eq!(report.topics, 1);
    let cache = WordCache::load(&Layout::new(root.path()).cache_file());
    assert!(!cache.contains("hallo"));
}

#[test]
fn missing_model_aborts() {
    let root = tempdir().unwrap();
    write_topic(root.path(), "grundschule", &[("info.txt", "Liebe Eltern.")]);

    let model = root.path().join("model.json");
    let result = Deutschkurs::new(root.path(), Some(model)).run();

    assert!(matches!(result, Err(Error::Setup(_))));
    assert!(!Layout::new(root.path()).cache_file().exists());
}

#[test]
fn model_changes_annotation() {
    let root = tempdir().unwrap();
    write_topic(root.path(), "grundschule", &[("info.txt", "Liebe Eltern.")]);
    let model = root.path().join("model.json");
    fs::write(&model, r#"{"liebe": {"tag": "ADJA", "lemma": "lieb"}}"#).unwrap();

    Deutschkurs::new(root.path(), Some(model)).run().unwrap();
    let liebe = doc(root.path(), "liebe");
    assert!(liebe.starts_with("= liebe\n"));
    assert!(liebe.contains(":Part Of Speech:\t\tadjective, attributive\n"));
}

#[test]
fn generate_from_cache() {
    let root = tempdir().unwrap();
    write_topic(root.path(), "grundschule", &[("info.txt", "Liebe Eltern.")]);
    let pipeline = Deutschkurs::new(root.path(), None);
    pipeline.run().unwrap();

    let path = root.path().join("docs").join("liebe.adoc");
    let before = fs::read(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(pipeline.generate().unwrap(), 2);
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn missing_definitions() {
    let root = tempdir().unwrap();
    let layout = Layout::new(root.path());
    write_topic(root.path(), "grundschule", &[("info.txt", "Liebe Eltern.")]);
    layout.ensure().unwrap();
    fs::write(layout.dictionary_file(), r#"{"eltern": "parents"}"#).unwrap();

    let report = Deutschkurs::new(root.path(), None).run().unwrap();
    assert_eq!(report.missing_definitions, 1);
    assert_eq!(fs::read_to_string(layout.missing_file()).unwrap(), "liebe\n");
}

#[test]
fn overlong_word_does_not_block_runs() {
    let root = tempdir().unwrap();
    let layout = Layout::new(root.path());
    let long = format!("Wort{}", "a".repeat(300));
    let text = format!("Liebe Eltern und {}.", long);
    write_topic(root.path(), "grundschule", &[("info.txt", text.as_str())]);

    let pipeline = Deutschkurs::new(root.path(), None);
    let first = pipeline.run().unwrap();
    assert!(WordCache::load(&layout.cache_file()).contains(&long.to_lowercase()));
    assert_eq!(first.written, first.cached_after - 1);
    assert!(layout.missing_file().is_file());

    write_topic(root.path(), "grundschule", &[("info.txt", "Liebe Eltern.")]);
    let second = pipeline.run().unwrap();
    assert_eq!(second.written, first.written);
    assert_eq!(pipeline.generate().unwrap(), first.written);
}

#[test]
fn generate_does_not_seed_userdata() {
    let root = tempdir().unwrap();
    let layout = Layout::new(root.path());

    assert_eq!(Deutschkurs::new(root.path(), None).generate().unwrap(), 0);
    assert!(layout.docs_dir().is_dir());
    assert!(!layout.userdata_dir().exists());
}
