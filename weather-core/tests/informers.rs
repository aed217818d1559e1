//! Integration tests for the informers client using wiremock.

use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param},
};
use yaweather_core::{
    Fact, Forecast, Info, Part, Weather, WeatherError, WeatherProvider, WeatherRequest,
    YandexWeatherProvider,
};

const API_KEY: &str = "test-api-key";

fn part_fixture(name: &str, temp: i32, condition: &str, daytime: &str) -> serde_json::Value {
    serde_json::json!({
        "part_name": name,
        "temp_min": temp - 1,
        "temp_max": temp + 1,
        "temp_avg": temp,
        "feels_like": temp - 6,
        "icon": "ovc_sn",
        "condition": condition,
        "daytime": daytime,
        "polar": false,
        "wind_speed": 4.0,
        "wind_gust": 9.5,
        "wind_dir": "nw",
        "pressure_mm": 745,
        "pressure_pa": 993,
        "humidity": 88,
        "prec_mm": 1.2,
        "prec_period": 360,
        "prec_prob": 80
    })
}

fn sample_informers_response() -> serde_json::Value {
    serde_json::json!({
        "now": 1700000000,
        "now_dt": "2023-11-14T22:13:20.000Z",
        "info": {
            "lat": 55.75,
            "lon": 37.62,
            "url": "https://yandex.ru/pogoda/?lat=55.75&lon=37.62"
        },
        "fact": {
            "temp": -5,
            "feels_like": -11,
            "icon": "ovc_sn",
            "condition": "snow",
            "wind_speed": 5.0,
            "wind_gust": 10.2,
            "wind_dir": "n",
            "pressure_mm": 745,
            "pressure_pa": 993,
            "humidity": 90,
            "daytime": "n",
            "polar": false,
            "season": "winter",
            "obs_time": 1699999200
        },
        "forecast": {
            "date": "2023-11-15",
            "date_ts": 1700006400,
            "week": 46,
            "sunrise": "07:48",
            "sunset": "16:17",
            "moon_code": 12,
            "moon_text": "moon-code-12",
            "parts": [
                part_fixture("night", -6, "snow", "n"),
                part_fixture("morning", -5, "light-snow", "d"),
                part_fixture("day", -2, "overcast", "d"),
                part_fixture("evening", -4, "cloudy", "n")
            ]
        }
    })
}

fn create_test_provider(mock_server: &MockServer) -> YandexWeatherProvider {
    YandexWeatherProvider::with_base_url(API_KEY.to_string(), mock_server.uri())
}

async fn setup_informers_mock(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/informers"))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn fetch_decodes_full_payload() {
    let mock_server = MockServer::start().await;
    setup_informers_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_informers_response()),
    )
    .await;

    let provider = create_test_provider(&mock_server);
    let weather = provider.fetch(55.75, 37.62, "ru_RU").await.expect("should decode");

    assert_eq!(weather.now, 1700000000);
    assert_eq!(weather.now_dt, "2023-11-14T22:13:20.000Z");
    assert_eq!(
        weather.info,
        Info {
            lat: 55.75,
            lon: 37.62,
            url: "https://yandex.ru/pogoda/?lat=55.75&lon=37.62".to_string(),
        }
    );

    let expected_fact = Fact {
        temp: -5,
        feels_like: -11,
        temp_water: 0,
        icon: "ovc_sn".into(),
        condition: "snow".into(),
        wind_speed: 5.0,
        wind_gust: 10.2,
        wind_dir: "n".into(),
        pressure_mm: 745,
        pressure_pa: 993,
        humidity: 90,
        daytime: "n".into(),
        polar: false,
        season: "winter".into(),
        obs_time: 1699999200,
    };
    assert_eq!(weather.fact, expected_fact);
    assert_eq!(weather.fact.condition_text(), Some("Снег"));

    let forecast = &weather.forecast;
    assert_eq!(forecast.date, "2023-11-15");
    assert_eq!(forecast.date_ts, 1700006400);
    assert_eq!(forecast.week, 46);
    assert_eq!(forecast.sunrise, "07:48");
    assert_eq!(forecast.sunset, "16:17");
    assert_eq!(forecast.moon_code, 12);
    assert_eq!(forecast.moon_text, "moon-code-12");
    assert_eq!(forecast.moon_phase_text(), Some("Первая четверть"));

    let names: Vec<&str> = forecast.parts.iter().map(|p| p.part_name.as_str()).collect();
    assert_eq!(names, ["night", "morning", "day", "evening"]);

    let day = &forecast.parts[2];
    assert_eq!(day.temp_min, -3);
    assert_eq!(day.temp_max, -1);
    assert_eq!(day.temp_avg, -2);
    assert_eq!(day.condition, "overcast");
    assert!((day.prec_mm - 1.2).abs() < f64::EPSILON);
    assert_eq!(day.prec_period, 360);
    assert_eq!(day.prec_prob, 80);
}

#[tokio::test]
async fn parts_keep_response_order() {
    let mut body = sample_informers_response();
    body["forecast"]["parts"] = serde_json::json!([
        part_fixture("evening", 1, "clear", "n"),
        part_fixture("night", 0, "clear", "n"),
        part_fixture("day", 3, "clear", "d")
    ]);

    let mock_server = MockServer::start().await;
    setup_informers_mock(&mock_server, ResponseTemplate::new(200).set_body_json(body)).await;

    let weather = create_test_provider(&mock_server)
        .fetch(55.75, 37.62, "ru_RU")
        .await
        .expect("should decode");

    let names: Vec<&str> = weather.forecast.parts.iter().map(|p| p.part_name.as_str()).collect();
    assert_eq!(names, ["evening", "night", "day"]);
}

#[tokio::test]
async fn request_carries_key_header_and_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/informers"))
        .and(header("X-Yandex-API-Key", API_KEY))
        .and(query_param("lat", "55.75"))
        .and(query_param("lon", "-37.62"))
        .and(query_param("lang", "en_US"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_informers_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = create_test_provider(&mock_server).fetch(55.75, -37.62, "en_US").await;
    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn provider_trait_forwards_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/informers"))
        .and(query_param("lat", "59.94"))
        .and(query_param("lon", "30.31"))
        .and(query_param("lang", "ru_RU"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_informers_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider: Box<dyn WeatherProvider> = Box::new(create_test_provider(&mock_server));
    let request = WeatherRequest {
        latitude: 59.94,
        longitude: 30.31,
        lang: "ru_RU".into(),
    };

    let weather = provider.get_weather(&request).await.expect("should decode");
    assert_eq!(weather.fact.temp, -5);
}

#[tokio::test]
async fn concurrent_fetches_share_a_client() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/informers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_informers_response()))
        .expect(3)
        .mount(&mock_server)
        .await;

    let provider = create_test_provider(&mock_server);
    let (a, b, c) = tokio::join!(
        provider.fetch(55.75, 37.62, "ru_RU"),
        provider.fetch(59.94, 30.31, "ru_RU"),
        provider.fetch(56.84, 60.61, "en_US"),
    );

    assert!(a.is_ok() && b.is_ok() && c.is_ok());
}

// ============================================================================
// Error handling scenarios
// ============================================================================

#[tokio::test]
async fn forbidden_is_api_error() {
    let mock_server = MockServer::start().await;
    setup_informers_mock(
        &mock_server,
        ResponseTemplate::new(403).set_body_string("Forbidden"),
    )
    .await;

    let result = create_test_provider(&mock_server).fetch(55.75, 37.62, "ru_RU").await;

    assert!(
        matches!(result, Err(WeatherError::Api { status: 403 })),
        "Expected Api(403), got: {result:?}"
    );
}

#[tokio::test]
async fn not_found_is_api_error_with_status() {
    let mock_server = MockServer::start().await;
    setup_informers_mock(&mock_server, ResponseTemplate::new(404)).await;

    let err = create_test_provider(&mock_server)
        .fetch(95.0, 200.0, "ru_RU")
        .await
        .expect_err("404 must fail");

    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn invalid_json_is_decode_error() {
    let mock_server = MockServer::start().await;
    setup_informers_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_string("not valid json"),
    )
    .await;

    let result = create_test_provider(&mock_server).fetch(55.75, 37.62, "ru_RU").await;

    assert!(
        matches!(result, Err(WeatherError::Decode(_))),
        "Expected Decode, got: {result:?}"
    );
}

#[tokio::test]
async fn unchecked_status_falls_through_to_decoding() {
    let mock_server = MockServer::start().await;
    setup_informers_mock(
        &mock_server,
        ResponseTemplate::new(500)
            .set_body_json(serde_json::json!({"status": 500, "message": "Internal error"})),
    )
    .await;

    let result = create_test_provider(&mock_server).fetch(55.75, 37.62, "ru_RU").await;

    assert!(
        matches!(result, Err(WeatherError::Decode(_))),
        "Expected Decode, got: {result:?}"
    );
}

#[tokio::test]
async fn unchecked_status_with_valid_body_decodes() {
    let mock_server = MockServer::start().await;
    setup_informers_mock(
        &mock_server,
        ResponseTemplate::new(203).set_body_json(sample_informers_response()),
    )
    .await;

    let weather = create_test_provider(&mock_server)
        .fetch(55.75, 37.62, "ru_RU")
        .await
        .expect("non-rejected status still decodes");
    assert_eq!(weather.now, 1700000000);
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    // Nothing listens on port 1.
    let provider =
        YandexWeatherProvider::with_base_url(API_KEY.to_string(), "http://127.0.0.1:1");
    let result = provider.fetch(55.75, 37.62, "ru_RU").await;

    assert!(
        matches!(result, Err(WeatherError::Transport(_))),
        "Expected Transport, got: {result:?}"
    );
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn weather_json_roundtrip() {
    let weather = Weather {
        now: 1700000000,
        now_dt: "2023-11-14T22:13:20.000Z".into(),
        info: Info {
            lat: 43.1,
            lon: 131.9,
            url: "https://yandex.ru/pogoda/vladivostok".into(),
        },
        fact: Fact {
            temp: 4,
            feels_like: 0,
            temp_water: 9,
            condition: "partly-cloudy".into(),
            wind_dir: "c".into(),
            polar: true,
            ..Fact::default()
        },
        forecast: Forecast {
            date: "2023-11-15".into(),
            moon_code: 3,
            parts: vec![
                Part {
                    part_name: "night".into(),
                    prec_mm: 0.3,
                    ..Part::default()
                },
                Part {
                    part_name: "morning".into(),
                    prec_prob: 10,
                    ..Part::default()
                },
            ],
            ..Forecast::default()
        },
    };

    let json = serde_json::to_string(&weather).expect("serializes");
    let back: Weather = serde_json::from_str(&json).expect("deserializes");

    assert_eq!(back, weather);
}
