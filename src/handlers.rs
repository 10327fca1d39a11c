use std::sync::{Arc, Mutex};

use handlebars_iron::Template;
use iron::headers::Location;
use iron::prelude::*;
use iron::{status, Handler};
use router::Router;
use urlencoded::UrlEncodedBody;

use database::Database;
use errors::BlogError;
use model::PostForm;

/// Match a `Result` into its inner value or turn the error into its
/// HTTP response: the error picks the status, its message is the body.
macro_rules! try_handler {
    ( $e:expr ) => {
        match $e {
            Ok(x) => x,
            Err(e) => return Ok(Response::with((e.status(), e.to_string()))),
        }
    };
}

/// Lock a `Mutex`. This macro simply calls `m.lock().unwrap()`,
/// because the thread should panic if the lock can not be obtained:
/// we cannot recover from that.
macro_rules! lock {
    ( $e:expr ) => {
        $e.lock().unwrap()
    };
}

/// Get the value of a parameter in the URI.
/// If the parameter was absent, return `400 Bad Request`.
/// If we could not obtain the parameter list, return `500 Internal Server Error`.
macro_rules! get_http_param {
    ( $r:expr, $e:expr ) => {
        match $r.extensions.get::<Router>() {
            Some(router) => match router.find($e) {
                Some(val) => val,
                None => return Ok(Response::with(status::BadRequest)),
            },
            None => return Ok(Response::with(status::InternalServerError)),
        }
    };
}

/// Every mutation answers with a redirect to the feed, so a browser
/// refresh never replays a form submission.
fn redirect(location: &str) -> Response {
    let mut response = Response::with(status::Found);
    response.headers.set(Location(location.to_string()));
    response
}

/// Read the submitted form, if there is one. An absent or unreadable
/// body is the same as an empty form: validation decides what is
/// actually missing.
fn read_form(req: &mut Request) -> PostForm {
    match req.get_ref::<UrlEncodedBody>() {
        Ok(query) => PostForm::from_query(query),
        Err(_) => PostForm::default(),
    }
}

pub struct Handlers {
    pub index: IndexHandler,
    pub add_form: AddFormHandler,
    pub add_post: AddPostHandler,
    pub edit_form: EditFormHandler,
    pub update_post: UpdatePostHandler,
    pub delete_post: DeletePostHandler,
}

impl Handlers {
    pub fn new(database: Database) -> Handlers {
        let database = Arc::new(Mutex::new(database));
        Handlers {
            index: IndexHandler::new(database.clone()),
            add_form: AddFormHandler,
            add_post: AddPostHandler::new(database.clone()),
            edit_form: EditFormHandler::new(database.clone()),
            update_post: UpdatePostHandler::new(database.clone()),
            delete_post: DeletePostHandler::new(database.clone()),
        }
    }
}

pub struct IndexHandler {
    database: Arc<Mutex<Database>>,
}

impl IndexHandler {
    fn new(database: Arc<Mutex<Database>>) -> IndexHandler {
        IndexHandler { database: database }
    }
}

impl Handler for IndexHandler {
    fn handle(&self, _: &mut Request) -> IronResult<Response> {
        let posts = lock!(self.database).posts().clone();

        let mut response = Response::new();
        response
            .set_mut(Template::new("index", json!({ "posts": posts })))
            .set_mut(status::Ok);
        Ok(response)
    }
}

pub struct AddFormHandler;

impl Handler for AddFormHandler {
    fn handle(&self, _: &mut Request) -> IronResult<Response> {
        let mut response = Response::new();
        response
            .set_mut(Template::new("add", json!({})))
            .set_mut(status::Ok);
        Ok(response)
    }
}

pub struct AddPostHandler {
    database: Arc<Mutex<Database>>,
}

impl AddPostHandler {
    fn new(database: Arc<Mutex<Database>>) -> AddPostHandler {
        AddPostHandler { database: database }
    }
}

impl Handler for AddPostHandler {
    fn handle(&self, req: &mut Request) -> IronResult<Response> {
        let form = read_form(req);
        let new_post = try_handler!(form.into_new_post());

        lock!(self.database).create_post(new_post);

        Ok(redirect("/"))
    }
}

pub struct EditFormHandler {
    database: Arc<Mutex<Database>>,
}

impl EditFormHandler {
    fn new(database: Arc<Mutex<Database>>) -> EditFormHandler {
        EditFormHandler { database: database }
    }
}

impl Handler for EditFormHandler {
    fn handle(&self, req: &mut Request) -> IronResult<Response> {
        let id = get_http_param!(req, "id").to_string();

        let found = lock!(self.database).find_post(&id).cloned();
        let post = try_handler!(found.ok_or(BlogError::PostNotFound { id: id }));

        let mut response = Response::new();
        response
            .set_mut(Template::new("update", json!({ "post": post })))
            .set_mut(status::Ok);
        Ok(response)
    }
}

pub struct UpdatePostHandler {
    database: Arc<Mutex<Database>>,
}

impl UpdatePostHandler {
    fn new(database: Arc<Mutex<Database>>) -> UpdatePostHandler {
        UpdatePostHandler { database: database }
    }
}

impl Handler for UpdatePostHandler {
    fn handle(&self, req: &mut Request) -> IronResult<Response> {
        let id = get_http_param!(req, "id").to_string();
        let form = read_form(req);

        let updated = lock!(self.database).update_post(&id, form);
        try_handler!(updated.ok_or(BlogError::PostNotFound { id: id }));

        Ok(redirect("/"))
    }
}

pub struct DeletePostHandler {
    database: Arc<Mutex<Database>>,
}

impl DeletePostHandler {
    fn new(database: Arc<Mutex<Database>>) -> DeletePostHandler {
        DeletePostHandler { database: database }
    }
}

impl Handler for DeletePostHandler {
    fn handle(&self, req: &mut Request) -> IronResult<Response> {
        let ref post_id = get_http_param!(req, "id");

        lock!(self.database).delete_post(post_id);

        Ok(redirect("/"))
    }
}
