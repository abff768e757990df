use clap::Parser;
use notepin::cli::args::{Args, Command};
use notepin::domain::NoteId;

#[test]
fn given_no_subcommand_when_parsing_then_fails() {
    // Arrange
    let args = vec!["notepin", "-v"];

    // Act & Assert
    let result = Args::try_parse_from(args);
    assert!(result.is_err(), "Should fail without subcommand");
}

#[test]
fn given_list_with_search_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["notepin", "list", "shop"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::List { search } => assert_eq!(search.as_deref(), Some("shop")),
        _ => panic!("Expected List command"),
    }
    assert_eq!(parsed.config, None);
    assert_eq!(parsed.base_url, None);
}

#[test]
fn given_add_with_all_fields_when_parsing_then_succeeds() {
    // Arrange
    let args = vec![
        "notepin", "add", "--title", "Shopping", "--content", "milk", "--tags", "home",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Add {
            title,
            content,
            tags,
        } => {
            assert_eq!(title, "Shopping");
            assert_eq!(content, "milk");
            assert_eq!(tags, "home");
        }
        _ => panic!("Expected Add command"),
    }
}

#[test]
fn given_add_without_tags_when_parsing_then_fails() {
    let args = vec!["notepin", "add", "--title", "Shopping", "--content", "milk"];

    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn given_blank_title_when_parsing_add_then_fails() {
    let args = vec![
        "notepin", "add", "--title", "  ", "--content", "milk", "--tags", "home",
    ];

    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn given_edit_with_one_field_when_parsing_then_others_are_none() {
    // Arrange
    let args = vec!["notepin", "edit", "12", "--title", "Groceries"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Edit {
            note_id,
            title,
            content,
            tags,
        } => {
            assert_eq!(note_id, NoteId::Number(12));
            assert_eq!(title.as_deref(), Some("Groceries"));
            assert_eq!(content, None);
            assert_eq!(tags, None);
        }
        _ => panic!("Expected Edit command"),
    }
}

#[test]
fn given_delete_with_text_id_and_yes_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["notepin", "delete", "a7f", "--yes"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Delete { note_id, yes } => {
            assert_eq!(note_id, NoteId::Text("a7f".to_string()));
            assert!(yes);
        }
        _ => panic!("Expected Delete command"),
    }
}

#[test]
fn given_delete_without_yes_when_parsing_then_yes_is_false() {
    let parsed = Args::try_parse_from(vec!["notepin", "delete", "3"]).unwrap();

    match parsed.command {
        Command::Delete { yes, .. } => assert!(!yes),
        _ => panic!("Expected Delete command"),
    }
}

#[test]
fn given_global_flags_after_subcommand_when_parsing_then_succeeds() {
    // Arrange - global flags work anywhere when marked as global
    let args = vec![
        "notepin",
        "board",
        "-c",
        "/path/to/config.toml",
        "-u",
        "http://notes.test:8080",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert!(matches!(parsed.command, Command::Board { search: None }));
    assert_eq!(
        parsed.config,
        Some(std::path::PathBuf::from("/path/to/config.toml"))
    );
    assert_eq!(parsed.base_url.as_deref(), Some("http://notes.test:8080"));
}

#[test]
fn given_verbose_flag_when_parsing_then_increments_count() {
    // Arrange
    let args = vec!["notepin", "-vv", "shell"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.verbose, 2);
    assert!(matches!(parsed.command, Command::Shell));
}
