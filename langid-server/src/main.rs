use std::path::Path;
use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, put, web};

use serde::Deserialize;

use langid_core::io::list_files;
use langid_core::model::language_model::LanguageModel;
use langid_core::model::language_set::LanguageSet;

/// Folder scanned for `.dat` corpora.
const DATA_FOLDER: &str = "./data";

/// Struct representing query parameters for the identification endpoints
#[derive(Deserialize)]
struct IdentifyParams {
	text: Option<String>,
}

#[derive(Deserialize)]
struct LanguageQuery {
	names: Option<String>,
}

struct SharedData {
	languages: LanguageSet,
}

impl IdentifyParams {
	/// Extracts the text to identify, rejecting missing or empty samples.
	fn text(&self) -> Result<&str, String> {
		match &self.text {
			Some(text) if !text.is_empty() => Ok(text),
			_ => Err("Missing or empty text".to_owned()),
		}
	}
}

/// HTTP GET endpoint `/v1/identify`
///
/// Identifies the language of the `text` query parameter against the
/// loaded language set. Returns the language name as the response body.
#[get("/v1/identify")]
async fn get_identified(data: web::Data<Mutex<SharedData>>, query: web::Query<IdentifyParams>) -> impl Responder {
	let text = match query.text() {
		Ok(t) => t.to_owned(),
		Err(e) => return HttpResponse::BadRequest().body(e),
	};

	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Language set lock failed"),
	};

	match shared_data.languages.classify(&text) {
		Ok(name) => HttpResponse::Ok().body(name.to_owned()),
		Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
	}
}

/// HTTP GET endpoint `/v1/scores`
///
/// Returns one `name score` line per scorable candidate, in candidate
/// order, for the `text` query parameter.
#[get("/v1/scores")]
async fn get_scores(data: web::Data<Mutex<SharedData>>, query: web::Query<IdentifyParams>) -> impl Responder {
	let text = match query.text() {
		Ok(t) => t.to_owned(),
		Err(e) => return HttpResponse::BadRequest().body(e),
	};

	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Language set lock failed"),
	};

	let lines: Vec<String> = shared_data
		.languages
		.scores(&text)
		.iter()
		.map(|(name, score)| format!("{} {}", name, score))
		.collect();
	HttpResponse::Ok().body(lines.join("\n"))
}

#[get("/v1/languages")]
async fn get_languages() -> impl Responder {
	match list_files(DATA_FOLDER, "dat") {
		Ok(files) => {
			let names: Vec<&str> = files.iter().map(|f| f.trim_end_matches(".dat")).collect();
			HttpResponse::Ok().body(names.join("\n"))
		}
		Err(_) => HttpResponse::InternalServerError().body("Failed to list languages"),
	}
}

#[get("/v1/loaded_languages")]
async fn get_loaded_languages(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Language set lock failed"),
	};
	HttpResponse::Ok().body(shared_data.languages.get_language_names().join("\n"))
}

#[put("/v1/load_languages")]
async fn put_languages(data: web::Data<Mutex<SharedData>>, query: web::Query<LanguageQuery>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Language set lock failed"),
	};

	let query_names = match &query.names {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty language name"),
	};

	let language_names: Vec<&str> = query_names
		.split(',')
		.map(|s| s.trim())
		.filter(|s| !s.is_empty())
		.collect();

	let mut languages = LanguageSet::default();
	for name in language_names {
		let corpus_path = format!("{DATA_FOLDER}/{name}.dat");
		let model = match LanguageModel::load(&corpus_path) {
			Ok(m) => m,
			Err(e) => return HttpResponse::InternalServerError().body(format!("Failed to load language: {e}")),
		};
		match languages.add(model) {
			Ok(_) => (),
			Err(e) => return HttpResponse::InternalServerError().body(format!("Failed to add language: {e}")),
		}
	}
	shared_data.languages = languages;

	HttpResponse::Ok().body("Languages loaded successfully")
}

/// Main entry point for the server.
///
/// Loads the language set, wraps it in a `Mutex` for thread safety,
/// and starts an Actix-web HTTP server with the identification endpoints.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - If `./data` is missing the server starts with an empty set; use
///   `PUT /v1/load_languages` once corpora are available.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let languages = if Path::new(DATA_FOLDER).is_dir() {
		match LanguageSet::new(DATA_FOLDER) {
			Ok(set) => set,
			Err(e) => {
				log::warn!("failed to load {DATA_FOLDER}: {e}");
				LanguageSet::default()
			}
		}
	} else {
		log::warn!("{DATA_FOLDER} does not exist, starting with an empty language set");
		LanguageSet::default()
	};
	log::info!("serving {} language(s)", languages.len());

	let shared_data = SharedData { languages };
	let shared_languages = web::Data::new(Mutex::new(shared_data));

	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(shared_languages.clone())
			.service(get_identified)
			.service(get_scores)
			.service(get_languages)
			.service(get_loaded_languages)
			.service(put_languages)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}
