use recman::{App, Console, LinkedList, Person, Song};

type Session<T> = App<T, &'static [u8], Vec<u8>>;

fn songs(titles: &[&str]) -> LinkedList<Song> {
    titles
        .iter()
        .map(|title| Song::new(*title, "Someone", 3.0, "Rock").unwrap())
        .collect()
}

fn play<T: recman::Record>(list: LinkedList<T>, input: &'static str) -> (LinkedList<T>, String) {
    let mut app: Session<T> = App::new(list, Console::new(input.as_bytes(), Vec::new()));
    app.run().unwrap();
    let (list, console) = app.into_parts();
    (list, String::from_utf8(console.into_inner().1).unwrap())
}

fn titles(list: &LinkedList<Song>) -> Vec<String> {
    list.iter().map(|s| s.title().to_string()).collect()
}

#[test]
fn exit_right_away() {
    let (list, out) = play(songs(&["A"]), "0\n");
    assert_eq!(list.len(), 1);
    assert!(out.starts_with("*** Song list ***\n1. Add song\n"));
    assert!(out.ends_with("Bye!\n"));
}

#[test]
fn closed_input_ends_the_session_quietly() {
    let (list, out) = play(songs(&["A"]), "2\n");
    assert_eq!(list.len(), 1);
    assert!(!out.contains("Bye!"));
}

#[test]
fn add_two_songs_in_one_go() {
    let input = "1\nX\nArtist X\n3\nPop\ny\nY\nArtist Y\n6.5\nJazz\nn\n2\n0\n";
    let (list, out) = play(songs(&["A"]), input);

    assert_eq!(titles(&list), ["Y", "X", "A"]);
    assert!(out.contains("Artist Y - Y (6.50 min, Jazz)\nArtist X - X (3.00 min, Pop)\n"));
}

#[test]
fn remove_b_twice() {
    let input = "5\nB\ny\nB\nn\n2\n0\n";
    let (list, out) = play(songs(&["A", "B", "C"]), input);

    assert_eq!(titles(&list), ["C", "A"]);
    assert!(out.contains("was removed from the list."));
    assert!(out.contains("There is no song with key 'B' in the list."));
}

#[test]
fn remove_from_empty_list_says_so() {
    let (list, out) = play(songs(&[]), "5\nA\nn\n0\n");
    assert!(list.is_empty());
    assert!(out.contains("The list is empty, nothing to remove."));
    assert!(!out.contains("There is no song"));
}

#[test]
fn update_song_genre_then_confirm() {
    let input = "4\nB\n3\nBlues\n0\ny\n0\n";
    let (list, out) = play(songs(&["A", "B"]), input);

    let b = list.search("B").unwrap().record();
    assert_eq!(b.genre(), "Blues");
    assert!(out.contains("Song updated!"));
}

#[test]
fn update_can_rename_the_key() {
    let input = "4\nA\n1\nZ\n0\ny\n0\n";
    let (list, _) = play(songs(&["A", "B"]), input);
    assert!(list.search("A").is_none());
    assert_eq!(titles(&list), ["B", "Z"]);
}

#[test]
fn update_unknown_key_reports_miss() {
    let (_, out) = play(songs(&["A"]), "4\nQ\n0\n");
    assert!(out.contains("There is no song with key 'Q' in the list."));
}

#[test]
fn short_songs_listing() {
    let list: LinkedList<Song> = vec![
        Song::new("Long", "x", 8.27, "Rock").unwrap(),
        Song::new("Short", "x", 2.47, "Rock").unwrap(),
        Song::new("Edge", "x", 5.0, "Rock").unwrap(),
    ]
    .into_iter()
    .collect();

    let (_, out) = play(list, "6\n0\n");
    assert!(out.contains("Songs shorter than 5 minutes:\nx - Short (2.47 min, Rock)\n"));
    assert!(!out.contains("x - Long"));
    assert!(!out.contains("x - Edge"));
}

#[test]
fn table_listing_has_headers() {
    let (_, out) = play(songs(&["A"]), "3\n0\n");
    assert!(out.contains("Title | Artist  | Duration | Genre\n"));
    assert!(out.contains("A     | Someone | 3.00     | Rock\n"));
}

#[test]
fn junk_menu_input_is_ignored() {
    let (_, out) = play(songs(&["A"]), "abc\n42\n0\n");
    assert_eq!(out.matches("Invalid option.").count(), 2);
}

#[test]
fn people_menu_round_trip() {
    let input = "1\n0\n12345678\nMarta Ruiz\nSan Martín 1050\n68\nn\n\
                 1\n45900321\nBruno Acosta\nBelgrano 77\n12\nn\n\
                 6\n5\n45900321\nn\n2\n0\n";
    let (list, out) = play(LinkedList::<Person>::new(), input);

    assert_eq!(list.len(), 1);
    assert_eq!(list.head().unwrap().record().id(), 12_345_678);
    assert!(out.contains("*** Person list ***"));
    assert!(out.contains("Adults (18 or older):\n#12345678 Marta Ruiz, 68 years old, lives at San Martín 1050\n"));
    assert!(!out.contains("Adults (18 or older):\n#45900321"));
}

#[test]
fn non_utf8_input_does_not_end_the_session() {
    let mut app: Session<Song> = App::new(
        LinkedList::new(),
        Console::new(&b"1\nT\n\xff\xfe\nA\n3\nRock\nn\n0\n"[..], Vec::new()),
    );
    app.run().unwrap();

    assert_eq!(app.list().len(), 1);
    let song = app.list().search("T").unwrap().record();
    assert_eq!(song.artist(), "\u{FFFD}\u{FFFD}");
    assert_eq!(song.duration(), 3.0);

    let (_, console) = app.into_parts();
    let out = String::from_utf8(console.into_inner().1).unwrap();
    assert!(out.ends_with("Bye!\n"));
}

#[test]
fn infinite_duration_is_asked_again() {
    let mut app: Session<Song> = App::new(
        LinkedList::new(),
        Console::new(&b"1\nT\nA\ninf\n4\nRock\nn\n0\n"[..], Vec::new()),
    );
    app.run().unwrap();
    assert_eq!(app.list().head().unwrap().record().duration(), 4.0);
}
