#![allow(dead_code)]

pub const TEST_API_KEY: &str = "test-key";
pub const LISTINGS_PATH: &str = "/v1/cryptocurrency/listings/latest";

/// Listings envelope with Bitcoin (+24h, -7d), Ethereum (flat 24h) and Tether (all negative).
pub const LISTINGS_BODY: &str = r#"{
    "status": {
        "timestamp": "2024-01-01T00:00:00.000Z",
        "error_code": 0,
        "error_message": null,
        "elapsed": 10,
        "credit_count": 1,
        "notice": null
    },
    "data": [
        {
            "id": 1,
            "name": "Bitcoin",
            "symbol": "BTC",
            "slug": "bitcoin",
            "num_market_pairs": 11000,
            "date_added": "2010-07-13T00:00:00.000Z",
            "tags": ["mineable"],
            "max_supply": 21000000,
            "circulating_supply": 19700000.0,
            "total_supply": 19700000.0,
            "platform": null,
            "cmc_rank": 1,
            "last_updated": "2024-01-01T00:00:00.000Z",
            "quote": {
                "USD": {
                    "price": 50000.12,
                    "volume_24h": 1000000000.0,
                    "percent_change_1h": 0.1,
                    "percent_change_24h": 2.5,
                    "percent_change_7d": -1.1,
                    "market_cap": 950000000000.0,
                    "market_cap_dominance": 50.0,
                    "fully_diluted_market_cap": 1050000000000.0,
                    "last_updated": "2024-01-01T00:00:00.000Z"
                }
            }
        },
        {
            "id": 1027,
            "name": "Ethereum",
            "symbol": "ETH",
            "slug": "ethereum",
            "cmc_rank": 2,
            "tags": [],
            "max_supply": null,
            "last_updated": "2024-01-01T00:00:00.000Z",
            "quote": {
                "USD": {
                    "price": 3000.5,
                    "percent_change_24h": 0,
                    "percent_change_7d": 4.2,
                    "last_updated": "2024-01-01T00:00:00.000Z"
                }
            }
        },
        {
            "id": 825,
            "name": "Tether USDt",
            "symbol": "USDT",
            "slug": "tether",
            "cmc_rank": 3,
            "platform": {
                "id": 1027,
                "name": "Ethereum",
                "symbol": "ETH",
                "slug": "ethereum",
                "token_address": "0xdac17f958d2ee523a2206206994597c13d831ec7"
            },
            "last_updated": "2024-01-01T00:00:00.000Z",
            "quote": {
                "USD": {
                    "price": 0.9998,
                    "percent_change_24h": -0.01,
                    "percent_change_7d": -0.02,
                    "last_updated": "2024-01-01T00:00:00.000Z"
                }
            }
        }
    ]
}"#;

pub const EXPECTED_PLAIN_OUTPUT: &str = "Bitcoin: $50000.12, 24h: 2.5%, 7d: -1.1%\n\
Ethereum: $3000.5, 24h: 0%, 7d: 4.2%\n\
Tether USDt: $0.9998, 24h: -0.01%, 7d: -0.02%\n";

pub const EMPTY_BODY: &str = r#"{"status": {"error_code": 0}, "data": []}"#;
