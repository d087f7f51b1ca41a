use anyhow::{bail, Context, Result};
use search_core::{Document, DocumentId, DocumentStatus, SearchServer};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct InputDoc {
    pub id: DocumentId,
    pub text: String,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default)]
    pub ratings: Vec<i32>,
}

/// Which documents a `search` may return.
#[derive(Debug, Clone, Copy)]
pub enum Filter {
    Status(DocumentStatus),
    EvenIds,
}

/// Loads documents from a `.jsonl` file (one object per line) or a `.json`
/// file holding either one object or an array of them.
pub fn load_documents(path: &Path) -> Result<Vec<InputDoc>> {
    let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader = BufReader::new(f);
    if path.extension().and_then(|s| s.to_str()) == Some("jsonl") {
        let mut docs = Vec::new();
        for (lineno, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() { continue; }
            let doc = serde_json::from_str(&line)
                .with_context(|| format!("{}:{}: malformed document", path.display(), lineno + 1))?;
            docs.push(doc);
        }
        return Ok(docs);
    }
    let json: serde_json::Value = serde_json::from_reader(reader)?;
    match json {
        serde_json::Value::Array(arr) => arr
            .into_iter()
            .map(|v| serde_json::from_value::<InputDoc>(v).map_err(anyhow::Error::from))
            .collect(),
        serde_json::Value::Object(_) => Ok(vec![serde_json::from_value(json)?]),
        _ => bail!("{}: expected a document object or an array of them", path.display()),
    }
}

pub fn build_server(stop_words: &str, docs: Vec<InputDoc>) -> Result<SearchServer> {
    let mut server = SearchServer::with_stop_words(stop_words);
    for doc in docs {
        server
            .add_document(doc.id, &doc.text, doc.status, &doc.ratings)
            .with_context(|| format!("adding document {}", doc.id))?;
    }
    tracing::info!(num_docs = server.document_count(), terms = server.index().term_count(), "documents loaded");
    Ok(server)
}

pub fn print_documents<W: Write>(out: &mut W, docs: &[Document]) -> Result<()> {
    for doc in docs {
        writeln!(out, "{doc}")?;
    }
    Ok(())
}

pub fn run_search<W: Write>(server: &SearchServer, query: &str, filter: Filter, json: bool, out: &mut W) -> Result<()> {
    let docs = match filter {
        Filter::Status(status) => server.find_top_documents_by_status(query, status)?,
        Filter::EvenIds => server.find_top_documents_with(query, &|id: DocumentId, _: DocumentStatus, _: i32| id % 2 == 0)?,
    };
    if json {
        serde_json::to_writer_pretty(&mut *out, &docs)?;
        writeln!(out)?;
    } else {
        print_documents(out, &docs)?;
    }
    Ok(())
}

pub fn run_match<W: Write>(server: &SearchServer, query: &str, id: DocumentId, json: bool, out: &mut W) -> Result<()> {
    let (words, status) = server.match_document(query, id)?;
    if json {
        let obj = serde_json::json!({ "document_id": id, "status": status, "words": words });
        serde_json::to_writer_pretty(&mut *out, &obj)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{{ document_id = {id}, status = {status}, words = [{}] }}", words.join(", "))?;
    }
    Ok(())
}

/// Seeds the sample corpus and prints three rankings of one query.
pub fn run_demo<W: Write>(out: &mut W) -> Result<()> {
    let mut server = SearchServer::with_stop_words("и в на");
    server.add_document(0, "белый кот и модный ошейник", DocumentStatus::Actual, &[8, -3])?;
    server.add_document(1, "пушистый кот пушистый хвост", DocumentStatus::Actual, &[7, 2, 7])?;
    server.add_document(2, "ухоженный пёс выразительные глаза", DocumentStatus::Actual, &[5, -12, 2, 1])?;
    server.add_document(3, "ухоженный скворец евгений", DocumentStatus::Banned, &[9])?;

    let query = "пушистый ухоженный кот";
    writeln!(out, "ACTUAL by default:")?;
    run_search(&server, query, Filter::Status(DocumentStatus::Actual), false, out)?;
    writeln!(out, "BANNED:")?;
    run_search(&server, query, Filter::Status(DocumentStatus::Banned), false, out)?;
    writeln!(out, "Even ids:")?;
    run_search(&server, query, Filter::EvenIds, false, out)?;
    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn read_required_line<R: BufRead>(input: &mut R, what: &str) -> Result<String> {
    read_line(input)?.with_context(|| format!("unexpected end of input, expected {what}"))
}

fn parse_numbers(line: &str) -> Result<Vec<i32>> {
    line.split_whitespace()
        .map(|n| n.parse::<i32>().with_context(|| format!("not a number: {n:?}")))
        .collect()
}

/// Line protocol: stop words, document count N, then N pairs of
/// (text line, ratings line `<count> <r1> .. <rcount>`). Every later line is
/// a query answered with its top documents.
pub fn run_console<R: BufRead, W: Write>(mut input: R, out: &mut W) -> Result<()> {
    let stop_words = read_required_line(&mut input, "stop words")?;
    let mut server = SearchServer::with_stop_words(&stop_words);

    let count_line = read_required_line(&mut input, "document count")?;
    let count: DocumentId = count_line.trim().parse().with_context(|| format!("bad document count {count_line:?}"))?;

    for id in 0..count {
        let text = read_required_line(&mut input, "document text")?;
        let ratings_line = read_required_line(&mut input, "document ratings")?;
        let numbers = parse_numbers(&ratings_line)?;
        let ratings = match numbers.split_first() {
            Some((&n, rest)) if n >= 0 && n as usize == rest.len() => rest,
            Some(_) => bail!("document {id}: rating count does not match {ratings_line:?}"),
            None => &[][..],
        };
        if let Err(err) = server.add_document(id, &text, DocumentStatus::Actual, ratings) {
            tracing::warn!(id, %err, "skipping document");
        }
    }

    while let Some(query) = read_line(&mut input)? {
        if query.trim().is_empty() { continue; }
        match server.find_top_documents(&query) {
            Ok(docs) => print_documents(out, &docs)?,
            Err(err) => tracing::warn!(query = %query, %err, "skipping query"),
        }
    }
    Ok(())
}
