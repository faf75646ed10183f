//! Seeds the store with the initial catalog, gear cards and feed posts.
//! Safe to re-run: unique keys use ON CONFLICT DO NOTHING and the other
//! tables are only filled when empty.

use bigdecimal::BigDecimal;
use chrono::{Duration, Utc};
use diesel::prelude::*;
use nduthi_gear::schema::{categories, gear_products, products, twitter_posts};

#[derive(Insertable)]
#[diesel(table_name = categories)]
struct SeedCategory {
    name: String,
    description: String,
    image_url: String,
}

#[derive(Insertable)]
#[diesel(table_name = products)]
struct SeedProduct {
    name: String,
    description: String,
    product_type: String,
    price: BigDecimal,
    category_id: i32,
    brand: String,
    sizes: Vec<String>,
    colors: Vec<String>,
    image_url: String,
    stock_quantity: i32,
    featured: bool,
}

#[derive(Insertable)]
#[diesel(table_name = gear_products)]
struct SeedGearProduct {
    name: String,
    description: String,
    category: String,
    price_min: i32,
    price_max: i32,
    image_url: String,
    in_stock: bool,
}

#[derive(Insertable)]
#[diesel(table_name = twitter_posts)]
struct SeedTwitterPost {
    tweet_id: String,
    content: String,
    author: String,
    handle: String,
    created_at: chrono::NaiveDateTime,
    likes: i32,
    retweets: i32,
    replies: i32,
    image_url: Option<String>,
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut conn = nduthi_gear::establish_connection();

    println!("Seeding motorcycle categories...");
    seed_categories(&mut conn)?;

    println!("Seeding products...");
    seed_products(&mut conn)?;

    println!("Seeding gear cards...");
    seed_gear_products(&mut conn)?;

    println!("Seeding feed posts...");
    seed_twitter_posts(&mut conn)?;

    println!("Done.");
    Ok(())
}

fn seed_categories(conn: &mut PgConnection) -> QueryResult<()> {
    let rows = vec![
        SeedCategory {
            name: "Sport".to_owned(),
            description: "High-performance bikes for speed enthusiasts and track riders"
                .to_owned(),
            image_url: "https://images.unsplash.com/photo-1558981403-c5f9899a28bc?w=800"
                .to_owned(),
        },
        SeedCategory {
            name: "Cruiser".to_owned(),
            description: "Comfortable, laid-back riding style for long-distance touring"
                .to_owned(),
            image_url: "https://images.unsplash.com/photo-1568772585407-9361f9bf3a87?w=800"
                .to_owned(),
        },
        SeedCategory {
            name: "Adventure".to_owned(),
            description: "Versatile bikes for on-road and off-road exploration".to_owned(),
            image_url: "https://images.unsplash.com/photo-1609630875171-b1321377ee65?w=800"
                .to_owned(),
        },
        SeedCategory {
            name: "Touring".to_owned(),
            description: "Long-distance comfort with storage and weather protection".to_owned(),
            image_url: "https://images.unsplash.com/photo-1558980664-769d59546b3d?w=800"
                .to_owned(),
        },
    ];

    diesel::insert_into(categories::table)
        .values(&rows)
        .on_conflict_do_nothing()
        .execute(conn)?;

    Ok(())
}

fn category_id(conn: &mut PgConnection, name: &str) -> QueryResult<i32> {
    categories::table
        .filter(categories::name.eq(name))
        .select(categories::id)
        .first(conn)
}

fn seed_products(conn: &mut PgConnection) -> QueryResult<()> {
    let count: i64 = products::table.count().get_result(conn)?;
    if count > 0 {
        return Ok(());
    }

    let sport = category_id(conn, "Sport")?;
    let cruiser = category_id(conn, "Cruiser")?;
    let adventure = category_id(conn, "Adventure")?;

    let rows = vec![
        SeedProduct {
            name: "AGV Pista GP RR".to_owned(),
            description: "Professional racing helmet with carbon fiber shell and advanced aerodynamics".to_owned(),
            product_type: "helmet".to_owned(),
            price: "208000.00".parse().unwrap(),
            category_id: sport,
            brand: "AGV".to_owned(),
            sizes: owned(&["XS", "S", "M", "L", "XL"]),
            colors: owned(&["Carbon", "White", "Black"]),
            image_url: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=800&q=80".to_owned(),
            stock_quantity: 15,
            featured: true,
        },
        SeedProduct {
            name: "Shoei X-Fourteen".to_owned(),
            description: "Premium sport helmet with exceptional ventilation and comfort".to_owned(),
            product_type: "helmet".to_owned(),
            price: "110500.00".parse().unwrap(),
            category_id: sport,
            brand: "Shoei".to_owned(),
            sizes: owned(&["S", "M", "L", "XL", "XXL"]),
            colors: owned(&["Matte Black", "White", "Red"]),
            image_url: "https://images.unsplash.com/photo-1612198188060-c7c2a3b66eae?w=800&q=80".to_owned(),
            stock_quantity: 20,
            featured: true,
        },
        SeedProduct {
            name: "Bell Custom 500".to_owned(),
            description: "Classic open-face helmet with vintage styling".to_owned(),
            product_type: "helmet".to_owned(),
            price: "26000.00".parse().unwrap(),
            category_id: cruiser,
            brand: "Bell".to_owned(),
            sizes: owned(&["S", "M", "L", "XL"]),
            colors: owned(&["Black", "White", "Bronze"]),
            image_url: "https://images.unsplash.com/photo-1592522957491-f1796b0d5d25?w=800&q=80".to_owned(),
            stock_quantity: 25,
            featured: false,
        },
        SeedProduct {
            name: "Arai XD-4".to_owned(),
            description: "Dual-sport helmet perfect for adventure riding".to_owned(),
            product_type: "helmet".to_owned(),
            price: "95000.00".parse().unwrap(),
            category_id: adventure,
            brand: "Arai".to_owned(),
            sizes: owned(&["S", "M", "L", "XL"]),
            colors: owned(&["White", "Black", "Fluorescent Yellow"]),
            image_url: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=800&q=80".to_owned(),
            stock_quantity: 12,
            featured: true,
        },
        SeedProduct {
            name: "Alpinestars Andes v3".to_owned(),
            description: "Waterproof touring jacket with removable thermal liner".to_owned(),
            product_type: "jacket".to_owned(),
            price: "32500.00".parse().unwrap(),
            category_id: adventure,
            brand: "Alpinestars".to_owned(),
            sizes: owned(&["M", "L", "XL", "XXL"]),
            colors: owned(&["Black", "Dark Gray"]),
            image_url: "https://images.unsplash.com/photo-1558618047-3c8c76ca7d13?w=800&q=80".to_owned(),
            stock_quantity: 18,
            featured: true,
        },
        SeedProduct {
            name: "Dainese Carbon 4".to_owned(),
            description: "Short leather gloves with carbon knuckle protection".to_owned(),
            product_type: "gloves".to_owned(),
            price: "14800.00".parse().unwrap(),
            category_id: sport,
            brand: "Dainese".to_owned(),
            sizes: owned(&["S", "M", "L", "XL"]),
            colors: owned(&["Black", "Black/Red"]),
            image_url: "https://images.unsplash.com/photo-1544966503-7cc5ac882d5d?w=800&q=80".to_owned(),
            stock_quantity: 30,
            featured: false,
        },
        SeedProduct {
            name: "Forma Adventure Low".to_owned(),
            description: "Off-road boots with full-grain leather and ankle armor".to_owned(),
            product_type: "boots".to_owned(),
            price: "28900.00".parse().unwrap(),
            category_id: adventure,
            brand: "Forma".to_owned(),
            sizes: owned(&["41", "42", "43", "44", "45"]),
            colors: owned(&["Brown", "Black"]),
            image_url: "https://images.unsplash.com/photo-1581833971358-2c8b550f87b3?w=800&q=80".to_owned(),
            stock_quantity: 10,
            featured: true,
        },
    ];

    diesel::insert_into(products::table)
        .values(&rows)
        .execute(conn)?;

    Ok(())
}

fn seed_gear_products(conn: &mut PgConnection) -> QueryResult<()> {
    let count: i64 = gear_products::table.count().get_result(conn)?;
    if count > 0 {
        return Ok(());
    }

    let rows = vec![
        SeedGearProduct {
            name: "Adventure Helmets".to_owned(),
            description: "Premium dual sport helmets for adventure touring".to_owned(),
            category: "helmets".to_owned(),
            price_min: 8500,
            price_max: 65000,
            image_url: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=600".to_owned(),
            in_stock: true,
        },
        SeedGearProduct {
            name: "Riding Jackets & Pants".to_owned(),
            description: "Waterproof adventure riding gear with armor protection".to_owned(),
            category: "protection".to_owned(),
            price_min: 12000,
            price_max: 45000,
            image_url: "https://images.unsplash.com/photo-1558618047-3c8c76ca7d13?w=600".to_owned(),
            in_stock: true,
        },
        SeedGearProduct {
            name: "Adventure Boots & Gloves".to_owned(),
            description: "Durable off-road boots and all-weather riding gloves".to_owned(),
            category: "accessories".to_owned(),
            price_min: 6500,
            price_max: 28000,
            image_url: "https://images.unsplash.com/photo-1544966503-7cc5ac882d5d?w=600".to_owned(),
            in_stock: true,
        },
        SeedGearProduct {
            name: "Navigation & Communication".to_owned(),
            description: "GPS units, intercoms, and motorcycle tech accessories".to_owned(),
            category: "tech".to_owned(),
            price_min: 3500,
            price_max: 55000,
            image_url: "https://images.unsplash.com/photo-1606107557195-0e29a4b5b4aa?w=600".to_owned(),
            in_stock: true,
        },
        SeedGearProduct {
            name: "Maintenance & Tools".to_owned(),
            description: "Essential motorcycle maintenance tools and spare parts".to_owned(),
            category: "tools".to_owned(),
            price_min: 2500,
            price_max: 18000,
            image_url: "https://images.unsplash.com/photo-1581833971358-2c8b550f87b3?w=600".to_owned(),
            in_stock: true,
        },
        SeedGearProduct {
            name: "Adventure Luggage".to_owned(),
            description: "Panniers, top boxes, and touring luggage systems".to_owned(),
            category: "touring".to_owned(),
            price_min: 8000,
            price_max: 35000,
            image_url: "https://images.unsplash.com/photo-1609630875171-b1321377ee65?w=600".to_owned(),
            in_stock: true,
        },
    ];

    diesel::insert_into(gear_products::table)
        .values(&rows)
        .execute(conn)?;

    Ok(())
}

fn seed_twitter_posts(conn: &mut PgConnection) -> QueryResult<()> {
    let now = Utc::now();

    let rows = vec![
        SeedTwitterPost {
            tweet_id: "tweet_001".to_owned(),
            content: "Hello, aspiring biker! Choosing the right motorcycle isn't just about picking a model, it's about finding the perfect fit for your needs & budget. Book a consultation session to work through the essentials.".to_owned(),
            author: "NduthiGear".to_owned(),
            handle: "nduthigear".to_owned(),
            created_at: (now - Duration::hours(2)).naive_utc(),
            likes: 24,
            retweets: 8,
            replies: 5,
            image_url: Some("https://images.unsplash.com/photo-1568772585407-9361f9bf3a87?w=800".to_owned()),
        },
        SeedTwitterPost {
            tweet_id: "tweet_002".to_owned(),
            content: "Adventure bike spotlight: BMW GS series vs Honda Africa Twin. Both are excellent for Kenya's diverse terrain - BMW brings superior electronics, Honda better value and proven reliability. Which would you choose?".to_owned(),
            author: "NduthiGear".to_owned(),
            handle: "nduthigear".to_owned(),
            created_at: (now - Duration::hours(5)).naive_utc(),
            likes: 42,
            retweets: 15,
            replies: 12,
            image_url: Some("https://images.unsplash.com/photo-1609630875171-b1321377ee65?w=800".to_owned()),
        },
        SeedTwitterPost {
            tweet_id: "tweet_003".to_owned(),
            content: "Safety tip for new riders: your gear is just as important as your skills. DOT/ECE approved helmet, armored jacket & pants, quality boots & gloves, back protector. Your life is worth the investment. #RideSafe".to_owned(),
            author: "NduthiGear".to_owned(),
            handle: "nduthigear".to_owned(),
            created_at: (now - Duration::hours(8)).naive_utc(),
            likes: 67,
            retweets: 28,
            replies: 9,
            image_url: None,
        },
        SeedTwitterPost {
            tweet_id: "tweet_004".to_owned(),
            content: "Confidence riding tip: master the basics before attempting advanced maneuvers. Smooth throttle control, progressive braking, body positioning, looking where you want to go. Book a confidence session if you need guidance!".to_owned(),
            author: "NduthiGear".to_owned(),
            handle: "nduthigear".to_owned(),
            created_at: (now - Duration::hours(12)).naive_utc(),
            likes: 38,
            retweets: 19,
            replies: 7,
            image_url: Some("https://images.unsplash.com/photo-1558618047-3c8c76ca7d13?w=800".to_owned()),
        },
        SeedTwitterPost {
            tweet_id: "tweet_005".to_owned(),
            content: "Maintenance Monday! Check tire pressure weekly, clean & lube the chain every 500km, change oil every 3,000km, inspect brakes monthly. Your bike will thank you with reliable performance.".to_owned(),
            author: "NduthiGear".to_owned(),
            handle: "nduthigear".to_owned(),
            created_at: (now - Duration::hours(24)).naive_utc(),
            likes: 29,
            retweets: 11,
            replies: 4,
            image_url: Some("https://images.unsplash.com/photo-1581833971358-2c8b550f87b3?w=800".to_owned()),
        },
    ];

    diesel::insert_into(twitter_posts::table)
        .values(&rows)
        .on_conflict_do_nothing()
        .execute(conn)?;

    Ok(())
}
