//! Demo seed data.
//!
//! Three demo wishers and their wishes, so a fresh instance has something
//! to exchange with.

use crate::domain::foundation::{DomainError, Timestamp, UserId, WishId};
use crate::domain::user::User;
use crate::domain::wish::{ImageRef, Wish};
use crate::ports::WishRepository;

use super::InMemoryIdentityProvider;

struct DemoWish {
    user_id: &'static str,
    display_name: &'static str,
    contact_info: &'static str,
    description: &'static str,
    image_seed: &'static str,
    age_secs: i64,
}

const DEMO_WISHES: [DemoWish; 3] = [
    DemoWish {
        user_id: "mock_user_1",
        display_name: "StarGazer",
        contact_info: "WeChat: star_gazer_99",
        description: "我希望能在极光下露营，看着绿色的光带舞动。",
        image_seed: "aurora",
        age_secs: 100,
    },
    DemoWish {
        user_id: "mock_user_2",
        display_name: "CoffeeLover",
        contact_info: "Email: coffee@paris.dream",
        description: "我想在巴黎的街头开一家充满了花香的咖啡馆。",
        image_seed: "coffee",
        age_secs: 200,
    },
    DemoWish {
        user_id: "mock_user_3",
        display_name: "CyberPunk",
        contact_info: "TG: @cyber_kitty",
        description: "希望拥有一只能够听懂我心事的机械猫。",
        image_seed: "robotcat",
        age_secs: 300,
    },
];

/// Registers the demo users and, if the store is empty, their wishes.
///
/// Users are always registered so their contacts resolve after a restart
/// against a persistent store. Returns the number of wishes inserted.
pub async fn seed_demo_data(
    identity: &InMemoryIdentityProvider,
    wishes: &dyn WishRepository,
) -> Result<usize, DomainError> {
    let store_is_empty = wishes.list_newest_first().await?.is_empty();
    let now = Timestamp::now();
    let mut inserted = 0;

    for demo in &DEMO_WISHES {
        let user = User::with_id(
            UserId::new(demo.user_id)?,
            demo.display_name,
            demo.contact_info,
        )?;

        if store_is_empty {
            let wish = Wish::reconstitute(
                WishId::new(),
                user.id().clone(),
                user.display_name().to_string(),
                demo.description.to_string(),
                ImageRef::new(format!(
                    "https://picsum.photos/seed/{}/800/800",
                    demo.image_seed
                )),
                now.minus_secs(demo.age_secs),
                Vec::new(),
            );
            wishes.save(&wish).await?;
            inserted += 1;
        }

        identity.register(user).await;
    }

    tracing::info!(inserted, "Demo data seeded");
    Ok(inserted)
}
