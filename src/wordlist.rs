use include_dir::{include_dir, Dir};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use serde_json::from_str;
use std::error::Error;

static WORDS_DIR: Dir = include_dir!("src/words");

/// A named pool of candidate secrets, embedded in the binary as json.
#[allow(dead_code)]
#[derive(Deserialize, Clone, Debug)]
pub struct WordList {
    pub name: String,
    pub size: u32,
    pub words: Vec<String>,
}

impl WordList {
    pub fn new(file_name: &str) -> Self {
        read_word_list_from_file(format!("{file_name}.json")).unwrap()
    }
}

fn read_word_list_from_file(file_name: String) -> Result<WordList, Box<dyn Error>> {
    let file = WORDS_DIR
        .get_file(file_name)
        .expect("Word list file not found");

    let file_as_str = file
        .contents_utf8()
        .expect("Unable to interpret file as a string");

    let list = from_str(file_as_str).expect("Unable to deserialize word list json");

    Ok(list)
}

/// Pick one candidate uniformly at random, lower-cased.
///
/// Pure given the injected random source; returns `None` for an empty pool
/// so the caller decides how to surface the configuration error.
pub fn pick_word<R: Rng + ?Sized>(candidates: &[String], rng: &mut R) -> Option<String> {
    candidates.choose(rng).map(|w| w.to_lowercase())
}
