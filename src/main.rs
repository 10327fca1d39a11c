extern crate iron;
extern crate router;
extern crate logger;
extern crate env_logger;
extern crate handlebars_iron;
extern crate urlencoded;
extern crate serde;
#[macro_use]
extern crate serde_json;
#[macro_use]
extern crate log;
extern crate thiserror;
extern crate chrono;
extern crate uuid;

#[cfg(test)]
extern crate iron_test;
#[cfg(test)]
extern crate tempfile;

mod config;
mod database;
mod errors;
mod handlers;
mod model;
mod storage;

use config::Config;
use database::Database;
use handlers::Handlers;

use handlebars_iron::{DirectorySource, HandlebarsEngine};
use iron::prelude::Chain;
use iron::Iron;
use logger::Logger;
use router::Router;

// RUST_LOG=logger=info calliope > logs 2>&1 &
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();

    let mut database = Database::new();
    for post in storage::load_posts(&config.data_file) {
        database.add_post(post);
    }

    let chain = blog_chain(database);

    info!("Listening on http://{}", config.address);
    Iron::new(chain).http(config.address.as_str()).unwrap();
}

/// Assemble the middleware chain around the blog routes. Split out of
/// `main` so the end-to-end tests serve exactly what the binary serves.
fn blog_chain(database: Database) -> Chain {
    let (logger_before, logger_after) = Logger::new(None);

    let handlers = Handlers::new(database);

    let mut router = Router::new();
    router.get("/", handlers.index, "index");
    router.get("/add", handlers.add_form, "add_form");
    router.post("/add", handlers.add_post, "add_post");
    router.get("/delete/:id", handlers.delete_post, "delete_post");
    router.get("/update/:id", handlers.edit_form, "edit_form");
    router.post("/update/:id", handlers.update_post, "update_post");

    let mut hbse = HandlebarsEngine::new();
    hbse.add(Box::new(DirectorySource::new("./templates/", ".hbs")));
    if let Err(r) = hbse.reload() {
        panic!("{}", r);
    }

    let mut chain = Chain::new(router);
    chain.link_before(logger_before); // Should be first!
    chain.link_after(hbse);
    chain.link_after(logger_after); // Should be last!
    chain
}
