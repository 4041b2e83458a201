use super::*;
use crate::config::ClientConfig;
use crate::state::session::MemoryTokenStore;

fn signed_in() -> (ApiClient, Session) {
    let session = Session::new(MemoryTokenStore::with_token("a.b.c"));
    let api = ApiClient::new(&ClientConfig::default(), session.clone());
    (api, session)
}

#[test]
fn logout_clears_session_even_when_request_fails() {
    let (api, session) = signed_in();
    futures::executor::block_on(logout(&api, &session));
    assert_eq!(session.token_untracked(), None);
}

#[test]
fn force_logout_clears_and_targets_login() {
    let owner = Owner::new();
    owner.with(|| {
        let (api, session) = signed_in();
        let redirect: PendingRedirect = RwSignal::new(None);

        futures::executor::block_on(force_logout(&api, &session, redirect));

        assert_eq!(session.token_untracked(), None);
        assert_eq!(redirect.get_untracked().as_deref(), Some("/login"));
    });
}
