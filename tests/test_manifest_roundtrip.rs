use std::fs::File;
use std::io::BufReader;

use tagbump::{ImageReference, Manifest, get_manifest_named};

const DEPLOYMENT: &str = concat!(
    "apiVersion: apps/v1\n",
    "kind: Deployment\n",
    "metadata:\n",
    "  name: web\n",
    "  labels:\n",
    "    team: platform\n",
    "spec:\n",
    "  replicas: 3\n",
    "  template:\n",
    "    spec:\n",
    "      containers:\n",
    "        - name: app\n",
    "          image: registry.example.com/team/app:1.4.0\n",
    "        - name: proxy\n",
    "          image: envoy:v1.29\n",
);

const KUSTOMIZATION: &str = concat!(
    "apiVersion: kustomize.config.k8s.io/v1beta1\n",
    "kind: Kustomization\n",
    "resources:\n",
    "  - deployment.yaml\n",
    "  - service.yaml\n",
    "images:\n",
    "  - name: registry.example.com/team/app\n",
    "    newTag: 1.4.0\n",
);

fn load_from_str(dialect: &str, yaml: &str) -> Box<dyn Manifest> {
    let mut manifest = get_manifest_named(dialect).unwrap();
    let mut bytes = yaml.as_bytes();
    manifest.load(&mut bytes).unwrap();
    manifest
}

fn write_to_string(manifest: &dyn Manifest) -> String {
    let mut buffer = Vec::new();
    manifest.write(&mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

#[test]
fn test_load_write_reload_is_idempotent_for_kubernetes() {
    let manifest = load_from_str("kubernetes", DEPLOYMENT);
    let written = write_to_string(manifest.as_ref());
    let reloaded = load_from_str("kubernetes", &written);
    assert_eq!(
        reloaded.get_images().unwrap(),
        manifest.get_images().unwrap()
    );
}

#[test]
fn test_load_write_reload_is_idempotent_for_kustomize() {
    let manifest = load_from_str("kustomize", KUSTOMIZATION);
    let written = write_to_string(manifest.as_ref());
    let reloaded = load_from_str("kustomize", &written);
    assert_eq!(
        reloaded.get_images().unwrap(),
        manifest.get_images().unwrap()
    );
}

#[test]
fn test_full_update_flow_through_the_factory() {
    let mut manifest = load_from_str("kubernetes", DEPLOYMENT);
    manifest
        .modify("registry.example.com/team/app", "1.5.0")
        .unwrap();

    let written = write_to_string(manifest.as_ref());
    let reloaded = load_from_str("kubernetes", &written);
    assert_eq!(
        reloaded.get_images().unwrap(),
        vec![
            ImageReference::new("registry.example.com/team/app", "1.5.0"),
            ImageReference::new("envoy", "v1.29"),
        ]
    );

    // Unrelated fields survive the rewrite
    assert!(written.contains("replicas: 3"));
    assert!(written.contains("team: platform"));
}

#[test]
fn test_update_flow_edits_manifest_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kustomization.yaml");
    std::fs::write(&path, KUSTOMIZATION).unwrap();

    let mut manifest = get_manifest_named("kustomize").unwrap();
    let mut reader = BufReader::new(File::open(&path).unwrap());
    manifest.load(&mut reader).unwrap();
    manifest
        .modify("registry.example.com/team/app", "1.5.0")
        .unwrap();

    let mut buffer = Vec::new();
    manifest.write(&mut buffer).unwrap();
    std::fs::write(&path, &buffer).unwrap();

    let mut reader = BufReader::new(File::open(&path).unwrap());
    let mut reloaded = get_manifest_named("kustomize").unwrap();
    reloaded.load(&mut reader).unwrap();
    assert_eq!(
        reloaded.get_images().unwrap(),
        vec![ImageReference::new("registry.example.com/team/app", "1.5.0")]
    );

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("- service.yaml"));
}

#[test]
fn test_no_match_update_keeps_images_unchanged() {
    let mut manifest = load_from_str("kustomize", KUSTOMIZATION);
    let before = manifest.get_images().unwrap();
    manifest.modify("some/other/app", "2.0").unwrap();
    assert_eq!(manifest.get_images().unwrap(), before);
}
