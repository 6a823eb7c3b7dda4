//! Screen lifecycles against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives every screen through
//! `UreqTransport` over real HTTP. Validates that request building, response
//! parsing and the controllers agree with an actual server.

use std::net::SocketAddr;

use article_core::{
    ArticleClient, ArticleGateway, Config, DeleteController, DeleteState, EditScreen, Field,
    ListScreen, Lookup, Phase, UreqTransport,
};
use article_core::{messages, FormController};

fn start_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn gateway_for(addr: SocketAddr) -> ArticleGateway<UreqTransport> {
    let config = Config {
        base_url: format!("http://{addr}/"),
    };
    ArticleGateway::from_config(&config)
}

#[test]
fn screen_lifecycle() {
    let gateway = gateway_for(start_server());

    // Step 1: list, should be empty.
    let list = ListScreen::load(&gateway);
    assert_eq!(list, ListScreen::Loaded(Vec::new()));
    assert_eq!(list.summary().as_deref(), Some("Aucun article trouvé"));

    // Step 2: create through the form.
    let mut form = FormController::create();
    form.apply_edit(Field::Title, "Integration test");
    form.apply_edit(Field::Description, "Created through the form controller");
    assert_eq!(form.submit(&gateway), Phase::Succeeded);

    // Step 3: list again, one article.
    let list = ListScreen::load(&gateway);
    assert_eq!(list.articles().len(), 1);
    let id = list.articles()[0].id;
    assert_eq!(list.articles()[0].title, "Integration test");

    // Step 4: edit it.
    let mut screen = EditScreen::load(&gateway, &id.to_string());
    let form = screen.form_mut().expect("article should be found");
    form.apply_edit(Field::Title, "Updated title");
    assert_eq!(form.submit(&gateway), Phase::Succeeded);

    let list = ListScreen::load(&gateway);
    assert_eq!(list.articles()[0].title, "Updated title");
    assert_eq!(
        list.articles()[0].description,
        "Created through the form controller"
    );

    // Step 5: an unknown id never renders a form.
    let screen = EditScreen::load(&gateway, "999");
    assert!(matches!(screen, EditScreen::NotFound));

    // Step 6: delete it.
    let mut delete = DeleteController::load(&gateway, &id.to_string());
    delete.reveal();
    assert_eq!(delete.delete(&gateway), &DeleteState::Deleted);

    // Step 7: list, empty again; the delete screen no longer finds it.
    assert!(ListScreen::load(&gateway).articles().is_empty());
    let delete = DeleteController::load(&gateway, &id.to_string());
    assert_eq!(delete.state(), &DeleteState::NotFound);
}

#[test]
fn unreachable_service_fails_every_screen_softly() {
    // Bind then drop to get a port nothing listens on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let gateway = ArticleGateway::new(
        ArticleClient::new(&format!("http://{addr}")),
        UreqTransport::new(),
    );

    assert_eq!(
        ListScreen::load(&gateway),
        ListScreen::LoadFailed(messages::LOAD_ARTICLES_FAILED.to_string())
    );
    assert_eq!(
        article_core::sync::load_article(&gateway, "1"),
        Lookup::LoadFailed(messages::LOAD_ARTICLE_FAILED.to_string())
    );

    let mut form = FormController::create();
    form.apply_edit(Field::Title, "Still here");
    form.apply_edit(Field::Description, "Input survives a failed request");
    assert_eq!(form.submit(&gateway), Phase::Idle);
    assert_eq!(form.submit_error(), Some(messages::CREATE_FAILED));
    assert_eq!(form.draft().title, "Still here");
}
