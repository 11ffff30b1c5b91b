//! End-to-end exchange flow over the in-memory adapters.
//!
//! Wires the application handlers exactly as the server does and walks
//! through publishing, browsing and exchanging wishes.

use std::sync::Arc;

use futures::future::join_all;

use wish_exchange::adapters::{
    InMemoryEventBus, InMemoryIdentityProvider, InMemoryWishRepository, MockImageGenerator,
};
use wish_exchange::application::handlers::exchange::{
    AttemptExchangeCommand, AttemptExchangeHandler, OpenExchangeHandler, OpenExchangeQuery,
};
use wish_exchange::application::handlers::identity::{LoginCommand, LoginHandler};
use wish_exchange::application::handlers::wish::{
    CreateWishCommand, CreateWishHandler, ListWishesHandler, ListWishesQuery,
};
use wish_exchange::domain::exchange::{
    ContactSource, ExchangeError, ExchangeOutcome, ExchangeView, ViewerState,
};
use wish_exchange::domain::foundation::{CommandMetadata, WishId};
use wish_exchange::domain::user::User;
use wish_exchange::domain::wish::{Wish, WishExchanged};
use wish_exchange::ports::WishRepository;

struct World {
    identity: Arc<InMemoryIdentityProvider>,
    wishes: Arc<InMemoryWishRepository>,
    events: Arc<InMemoryEventBus>,
}

impl World {
    fn new() -> Self {
        Self {
            identity: Arc::new(InMemoryIdentityProvider::new()),
            wishes: Arc::new(InMemoryWishRepository::new()),
            events: Arc::new(InMemoryEventBus::new()),
        }
    }

    async fn login(&self, name: &str, contact: &str) -> User {
        LoginHandler::new(self.identity.clone())
            .handle(LoginCommand {
                display_name: name.to_string(),
                contact_info: contact.to_string(),
            })
            .await
            .unwrap()
            .user
    }

    async fn publish(&self, owner: &User, description: &str) -> Wish {
        CreateWishHandler::new(
            self.wishes.clone(),
            Arc::new(MockImageGenerator::new()),
            self.events.clone(),
        )
        .handle(
            CreateWishCommand {
                owner: owner.clone(),
                description: description.to_string(),
            },
            CommandMetadata::new(owner.id().clone()),
        )
        .await
        .unwrap()
        .wish
    }

    fn exchange_handler(&self) -> AttemptExchangeHandler {
        AttemptExchangeHandler::new(self.wishes.clone(), self.identity.clone(), self.events.clone())
    }

    async fn exchange(
        &self,
        viewer: &User,
        wish_id: WishId,
        reciprocal: &str,
    ) -> Result<ExchangeOutcome, ExchangeError> {
        self.exchange_handler()
            .handle(
                AttemptExchangeCommand {
                    viewer: viewer.clone(),
                    wish_id,
                    reciprocal_description: reciprocal.to_string(),
                },
                CommandMetadata::new(viewer.id().clone()),
            )
            .await
    }

    async fn list_for(&self, viewer: Option<&User>) -> Vec<(String, ViewerState)> {
        ListWishesHandler::new(self.wishes.clone())
            .handle(ListWishesQuery {
                viewer: viewer.map(|u| u.id().clone()),
            })
            .await
            .unwrap()
            .into_iter()
            .map(|l| (l.wish.description().to_string(), l.viewer_state))
            .collect()
    }
}

#[tokio::test]
async fn alice_and_bob_exchange_wishes() {
    let world = World::new();
    let alice = world.login("Alice", "wx:alice").await;
    let bob = world.login("Bob", "tg:@bob").await;

    let wish = world.publish(&alice, "A quiet cabin by a lake").await;

    // Before any exchange Bob is locked out of Alice's contact
    assert_eq!(
        world.list_for(Some(&bob)).await,
        vec![("A quiet cabin by a lake".to_string(), ViewerState::Locked)]
    );

    let outcome = world
        .exchange(&bob, *wish.id(), "A bicycle for long weekend rides")
        .await
        .unwrap();

    assert_eq!(outcome.contact.contact, "wx:alice");
    assert_eq!(outcome.contact.source, ContactSource::Owner);
    assert!(outcome.newly_unlocked);
    assert_eq!(outcome.wish.exchanged_with(), &[bob.id().clone()]);

    assert_eq!(
        world.list_for(Some(&bob)).await,
        vec![("A quiet cabin by a lake".to_string(), ViewerState::Unlocked)]
    );
    assert_eq!(
        world.list_for(Some(&alice)).await,
        vec![("A quiet cabin by a lake".to_string(), ViewerState::Owner)]
    );

    // Re-opening shows the contact again without a new submission
    let view = OpenExchangeHandler::new(world.wishes.clone(), world.identity.clone())
        .handle(OpenExchangeQuery {
            viewer: bob.id().clone(),
            wish_id: *wish.id(),
        })
        .await
        .unwrap();
    match view {
        ExchangeView::Unlocked { contact, .. } => assert_eq!(contact.contact, "wx:alice"),
        other => panic!("expected unlocked view, got {:?}", other),
    }
}

#[tokio::test]
async fn repeated_exchange_is_idempotent() {
    let world = World::new();
    let alice = world.login("Alice", "wx:alice").await;
    let bob = world.login("Bob", "tg:@bob").await;
    let wish = world.publish(&alice, "Learn to bake sourdough").await;

    let first = world.exchange(&bob, *wish.id(), "Run a marathon").await.unwrap();
    let second = world.exchange(&bob, *wish.id(), "Something else").await.unwrap();

    assert_eq!(first.contact, second.contact);
    assert!(first.newly_unlocked);
    assert!(!second.newly_unlocked);

    let stored = world.wishes.find_by_id(wish.id()).await.unwrap().unwrap();
    assert_eq!(stored.exchanged_with().len(), 1);
    assert_eq!(world.events.events_of_type("wish.exchanged.v1").len(), 1);
}

#[tokio::test]
async fn concurrent_attempts_record_one_entry() {
    let world = World::new();
    let alice = world.login("Alice", "wx:alice").await;
    let bob = world.login("Bob", "tg:@bob").await;
    let wish = world.publish(&alice, "See the northern lights").await;

    let attempts = (0..16).map(|i| {
        let world = &world;
        let bob = &bob;
        let wish_id = *wish.id();
        async move {
            world
                .exchange(bob, wish_id, &format!("Reciprocal wish #{}", i))
                .await
        }
    });
    let results = join_all(attempts).await;

    assert!(results.iter().all(|r| r.is_ok()));
    assert_eq!(
        results
            .iter()
            .filter(|r| r.as_ref().map(|o| o.newly_unlocked).unwrap_or(false))
            .count(),
        1
    );

    let stored = world.wishes.find_by_id(wish.id()).await.unwrap().unwrap();
    assert_eq!(stored.exchanged_with(), &[bob.id().clone()]);

    let events = world.events.events_of_type("wish.exchanged.v1");
    assert_eq!(events.len(), 1);
    let payload: WishExchanged = events[0].payload_as().unwrap();
    assert_eq!(&payload.viewer_id, bob.id());
}

#[tokio::test]
async fn blank_reciprocal_wish_changes_nothing() {
    let world = World::new();
    let alice = world.login("Alice", "wx:alice").await;
    let bob = world.login("Bob", "tg:@bob").await;
    let wish = world.publish(&alice, "A garden full of tomatoes").await;

    let result = world.exchange(&bob, *wish.id(), "   \n\t ").await;

    assert!(matches!(result, Err(ExchangeError::InvalidInput { .. })));
    let stored = world.wishes.find_by_id(wish.id()).await.unwrap().unwrap();
    assert!(stored.exchanged_with().is_empty());
    assert_eq!(world.list_for(Some(&bob)).await[0].1, ViewerState::Locked);
}

#[tokio::test]
async fn owner_cannot_exchange_with_own_wish() {
    let world = World::new();
    let alice = world.login("Alice", "wx:alice").await;
    let wish = world.publish(&alice, "Visit Kyoto in spring").await;

    let result = world.exchange(&alice, *wish.id(), "Anything").await;

    assert!(matches!(result, Err(ExchangeError::SelfExchange)));
    let stored = world.wishes.find_by_id(wish.id()).await.unwrap().unwrap();
    assert!(stored.exchanged_with().is_empty());
}

#[tokio::test]
async fn unknown_wish_is_not_found() {
    let world = World::new();
    let bob = world.login("Bob", "tg:@bob").await;

    let missing = WishId::new();
    let result = world.exchange(&bob, missing, "A reciprocal wish").await;

    assert!(matches!(result, Err(ExchangeError::NotFound(id)) if id == missing));
}

#[tokio::test]
async fn wishes_are_listed_newest_first() {
    let world = World::new();
    let alice = world.login("Alice", "wx:alice").await;

    world.publish(&alice, "A").await;
    world.publish(&alice, "B").await;
    world.publish(&alice, "C").await;

    let listed: Vec<String> = world.list_for(None).await.into_iter().map(|(d, _)| d).collect();
    assert_eq!(listed, vec!["C", "B", "A"]);

    // Anonymous browsers see every wish as anonymous
    assert!(world
        .list_for(None)
        .await
        .iter()
        .all(|(_, state)| *state == ViewerState::Anonymous));
}

#[tokio::test]
async fn exchanges_are_per_viewer() {
    let world = World::new();
    let alice = world.login("Alice", "wx:alice").await;
    let bob = world.login("Bob", "tg:@bob").await;
    let carol = world.login("Carol", "carol@example.com").await;
    let wish = world.publish(&alice, "Adopt a rescue dog").await;

    world.exchange(&bob, *wish.id(), "Paint a mural").await.unwrap();

    assert_eq!(world.list_for(Some(&bob)).await[0].1, ViewerState::Unlocked);
    assert_eq!(world.list_for(Some(&carol)).await[0].1, ViewerState::Locked);
}
