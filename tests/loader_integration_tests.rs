use std::fs;
use std::io;
use template_loader::reader::{ContextReader, EmbeddedReader, FileSystemReader};
use template_loader::{
    loader_for, ClassPathLoader, CompositeLoader, ContextLoader, Encoding, Error, ErrorKind,
    FileLoader, Loader, LoaderConfig, TemplateLoader,
};
use tempfile::TempDir;
use test_log::test;

fn templates_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("templates/partials")).unwrap();
    fs::write(dir.path().join("templates/home.hbs"), "<h1>{{title}}</h1>").unwrap();
    fs::write(dir.path().join("templates/partials/header.hbs"), "header").unwrap();
    fs::write(dir.path().join("templates/unicode.hbs"), "naïve ☃ {{x}}").unwrap();
    fs::write(dir.path().join(".hbs"), "empty name").unwrap();
    dir
}

fn templates_config() -> LoaderConfig {
    LoaderConfig { prefix: "/templates/".into(), ..Default::default() }
}

#[test]
fn suffix_is_appended_once() {
    let dir = templates_dir();
    let loader = FileLoader::from_dir(dir.path(), templates_config()).unwrap();

    assert_eq!(loader.resolve("home"), "/templates/home.hbs");
    assert_eq!(loader.resolve("home.hbs"), "/templates/home.hbs");

    let plain = loader.load("home").unwrap();
    let suffixed = loader.load("home.hbs").unwrap();
    assert_eq!(plain, suffixed);
    assert_eq!(plain.path(), "/templates/home.hbs");
}

#[test]
fn nested_names_resolve_below_prefix() {
    let dir = templates_dir();
    let loader = FileLoader::from_dir(dir.path(), templates_config()).unwrap();
    assert_eq!(loader.load("partials/header").unwrap().content(), "header");
}

#[test]
fn absent_file_is_not_found() {
    let dir = templates_dir();
    let loader = FileLoader::from_dir(dir.path(), templates_config()).unwrap();
    let err = loader.load("missing").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(matches!(err, Error::NotFound { ref path, .. } if path == "/templates/missing.hbs"));
}

#[test]
fn content_round_trips_through_encoding() {
    let dir = templates_dir();
    let loader = FileLoader::from_dir(dir.path(), templates_config()).unwrap();
    let original = fs::read(dir.path().join("templates/unicode.hbs")).unwrap();

    let source = loader.load("unicode").unwrap();
    assert_eq!(loader.encoding().encode(source.content()).unwrap(), original);
}

#[test]
fn latin1_round_trips_every_byte() {
    let bytes: Vec<u8> = (0u8..=255).collect();
    let reader = EmbeddedReader::new().with("all.txt", bytes.clone());
    let loader = Loader::builder()
        .reader(reader)
        .suffix(".txt")
        .encoding(Encoding::Latin1)
        .build()
        .unwrap();

    let source = loader.load("all").unwrap();
    assert_eq!(Encoding::Latin1.encode(source.content()).unwrap(), bytes);
}

#[test]
fn empty_name_is_looked_up_as_prefix_plus_suffix() {
    let dir = templates_dir();
    let loader = FileLoader::from_dir(dir.path(), LoaderConfig::default()).unwrap();
    assert_eq!(loader.resolve(""), "/.hbs");
    assert_eq!(loader.load("").unwrap().content(), "empty name");
}

#[test]
fn configuration_before_first_load_applies() {
    let dir = templates_dir();
    let mut loader = FileLoader::from_dir(dir.path(), LoaderConfig::default()).unwrap();
    assert_eq!(loader.resolve("index"), "/index.hbs");
    assert!(loader.load("home").unwrap_err().is_not_found());

    loader.set_prefix("/templates/").unwrap();
    assert_eq!(loader.load("home").unwrap().content(), "<h1>{{title}}</h1>");

    loader.set_suffix(".html").unwrap();
    assert_eq!(loader.resolve("home"), "/templates/home.html");
}

#[test]
fn filesystem_rejects_traversal() {
    let dir = templates_dir();
    let loader = FileLoader::from_dir(dir.path().join("templates"), LoaderConfig::default())
        .unwrap();
    let err = loader.load("../../etc/passwd").unwrap_err();
    assert!(matches!(err, Error::PathTraversalError { .. }));
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn classpath_loader_reads_bundled_templates() {
    let mut loader: ClassPathLoader = Loader::new(EmbeddedReader::from_static(&[(
        "templates/home.hbs",
        &b"bundled home"[..],
    )]));
    loader.set_prefix("/templates/").unwrap();
    assert_eq!(loader.load("home").unwrap().content(), "bundled home");
    assert!(loader.load("about").unwrap_err().is_not_found());
}

#[test]
fn classpath_snapshot_matches_filesystem() {
    let dir = templates_dir();
    let embedded = Loader::with_config(
        EmbeddedReader::from_dir(dir.path()).unwrap(),
        templates_config(),
    )
    .unwrap();
    let files = FileLoader::from_dir(dir.path(), templates_config()).unwrap();

    for name in ["home", "partials/header", "unicode"] {
        assert_eq!(
            embedded.load(name).unwrap().content(),
            files.load(name).unwrap().content()
        );
    }
}

fn host(path: &str) -> io::Result<Option<Vec<u8>>> {
    match path {
        "/WEB-INF/views/home.hbs" => Ok(Some(b"from host".to_vec())),
        "/WEB-INF/views/locked.hbs" => {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "locked"))
        }
        _ => Ok(None),
    }
}

fn context_loader() -> ContextLoader<fn(&str) -> io::Result<Option<Vec<u8>>>> {
    Loader::builder()
        .reader(ContextReader::new(host as fn(&str) -> io::Result<Option<Vec<u8>>>))
        .prefix("/WEB-INF/views/")
        .build()
        .unwrap()
}

#[test]
fn context_loader_delegates_to_host() {
    let loader = context_loader();
    assert_eq!(loader.load("home").unwrap().content(), "from host");
    assert!(loader.load("away").unwrap_err().is_not_found());
}

#[test]
fn host_permission_failure_is_io_error() {
    let loader = context_loader();
    let err = loader.load("locked").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(matches!(err, Error::IoError(ref e) if e.kind() == io::ErrorKind::PermissionDenied));
}

#[test]
fn composite_tries_classpath_then_filesystem() {
    let dir = templates_dir();
    let classpath = Loader::with_config(
        EmbeddedReader::new().with("templates/home.hbs", &b"bundled"[..]),
        templates_config(),
    )
    .unwrap();
    let files = FileLoader::from_dir(dir.path(), templates_config()).unwrap();
    let composite =
        CompositeLoader::new(vec![Box::new(classpath), Box::new(files)]).unwrap();

    assert_eq!(composite.load("home").unwrap().content(), "bundled");
    assert_eq!(composite.load("partials/header").unwrap().content(), "header");
    assert!(composite.load("missing").unwrap_err().is_not_found());
}

#[test]
fn composite_aborts_on_io_failure() {
    let dir = templates_dir();
    let files = FileLoader::from_dir(dir.path(), LoaderConfig::default()).unwrap();
    let host_loader = Loader::builder()
        .reader(ContextReader::new(host as fn(&str) -> io::Result<Option<Vec<u8>>>))
        .prefix("/WEB-INF/views/")
        .build()
        .unwrap();
    fs::create_dir_all(dir.path().join("WEB-INF/views")).unwrap();
    fs::write(dir.path().join("WEB-INF/views/locked.hbs"), "fallback").unwrap();
    let files_with_views = FileLoader::from_dir(
        dir.path(),
        LoaderConfig { prefix: "/WEB-INF/views/".into(), ..Default::default() },
    )
    .unwrap();

    let composite = CompositeLoader::new(vec![
        Box::new(files),
        Box::new(host_loader),
        Box::new(files_with_views),
    ])
    .unwrap();
    let err = composite.load("locked").unwrap_err();
    assert!(matches!(err, Error::IoError(_)));
}

#[test]
fn loader_for_directory() {
    let dir = templates_dir();
    let loader = loader_for(dir.path().to_str().unwrap(), templates_config()).unwrap();
    assert_eq!(loader.load("home").unwrap().content(), "<h1>{{title}}</h1>");
}

#[test]
fn loader_for_file_url() {
    let dir = templates_dir();
    let url = url::Url::from_directory_path(dir.path()).unwrap();
    let loader = loader_for(url.as_str(), templates_config()).unwrap();
    assert_eq!(loader.load("home").unwrap().content(), "<h1>{{title}}</h1>");
    assert!(loader.load("missing").unwrap_err().is_not_found());
}

#[test]
fn filesystem_reader_requires_directory() {
    let err = FileSystemReader::new("/path/that/does/not/exist").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn loaders_are_shareable_across_threads() {
    let dir = templates_dir();
    let loader =
        std::sync::Arc::new(FileLoader::from_dir(dir.path(), templates_config()).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let loader = loader.clone();
            std::thread::spawn(move || loader.load("home").unwrap().into_content())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "<h1>{{title}}</h1>");
    }
}
