//! End-to-end tests of the reqwest-backed client against a mock search API.

mod helpers;

use helpers::{client_for, params};
use person_search::{
    categorize_http_error, AdvancedQuery, ErrorType, HttpError, LookupApi, Mode, OpsApi,
    PartyId, SearchApi, SearchResults, SortDirection,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RESULTS: &str = r#"{"results": [
    {"corp_party_id": 42, "first_nme": "SKY", "last_nme": "LITTLE", "corp_num": "BC0000042"}
]}"#;

#[tokio::test]
async fn test_basic_search_encodes_params_on_the_wire() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/person/search"))
        .and(query_param("last_nme", "Van Dyke"))
        .and(query_param("first_nme", "Jo&Ann"))
        .respond_with(ResponseTemplate::new(200).set_body_string(RESULTS))
        .expect(1)
        .mount(&server)
        .await;

    let api = SearchApi::new(client_for(&server));
    let response = api
        .basic_search(&params(&[("last_nme", "Van Dyke"), ("first_nme", "Jo&Ann")]))
        .await
        .unwrap();

    let results: SearchResults = response.json().unwrap();
    assert_eq!(results.results.len(), 1);
    assert_eq!(results.results[0].cell("last_nme").as_deref(), Some("LITTLE"));
}

#[tokio::test]
async fn test_advanced_search_sends_query_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/person/search/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(RESULTS))
        .expect(1)
        .mount(&server)
        .await;

    let api = SearchApi::new(client_for(&server));
    api.advanced_search("field=last_nme&operator=exact&value=Van%20Dyke&mode=ALL")
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/person/search/");
    assert_eq!(
        requests[0].url.query(),
        Some("field=last_nme&operator=exact&value=Van%20Dyke&mode=ALL")
    );
}

#[tokio::test]
async fn test_advanced_query_builder_round_trips_through_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/person/search/"))
        .and(query_param("field", "ANY_NME"))
        .and(query_param("value", "Sky Blue"))
        .and(query_param("mode", "ALL"))
        .and(query_param("sort_type", "dsc"))
        .and(query_param("sort_value", "corp_nme"))
        .respond_with(ResponseTemplate::new(200).set_body_string(RESULTS))
        .expect(1)
        .mount(&server)
        .await;

    let query = AdvancedQuery::new()
        .clause("ANY_NME", "contains", "Sky Blue")
        .mode(Mode::All)
        .sort(SortDirection::Desc, "corp_nme");
    let response = SearchApi::new(client_for(&server))
        .advanced_search_with(&query)
        .await
        .unwrap();
    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/person/search"))
        .respond_with(ResponseTemplate::new(400).set_body_string("No search query was received"))
        .mount(&server)
        .await;

    let err = SearchApi::new(client_for(&server))
        .basic_search(&params(&[]))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(400));
    assert!(matches!(err, HttpError::Status { ref body, .. } if body == "No search query was received"));
    assert_eq!(categorize_http_error(&err), ErrorType::HttpRequestBadRequest);
}

#[tokio::test]
async fn test_base_url_path_prefix_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/person/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(RESULTS))
        .expect(1)
        .mount(&server)
        .await;

    let config = person_search::Config {
        base_url: format!("{}/api/v1/", server.uri()),
        ..Default::default()
    };
    let api = SearchApi::new(person_search::init_client(&config).unwrap());
    api.basic_search(&params(&[("query", "x")])).await.unwrap();
}

#[tokio::test]
async fn test_connection_refused_is_request_error() {
    // Bind then drop a listener so its port is (almost certainly) closed.
    let addr = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let config = person_search::Config {
        base_url: format!("http://{}", addr),
        ..Default::default()
    };
    let api = SearchApi::new(person_search::init_client(&config).unwrap());

    let err = api.advanced_search("").await.unwrap_err();
    assert!(matches!(err, HttpError::Request(_)));
    assert_eq!(err.status_code(), None);
    assert_eq!(
        categorize_http_error(&err),
        ErrorType::HttpRequestConnectError
    );
}

#[tokio::test]
async fn test_ops_probes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ops/readyz"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": "api is ready"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ops/healthz"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(serde_json::json!({"message": "api is down"})),
        )
        .mount(&server)
        .await;

    let ops = OpsApi::new(client_for(&server));
    assert_eq!(ops.readyz().await.unwrap().message, "api is ready");

    let err = ops.healthz().await.unwrap_err();
    assert_eq!(err.status_code(), Some(500));
    assert_eq!(
        categorize_http_error(&err),
        ErrorType::HttpRequestInternalServerError
    );
}

#[tokio::test]
async fn test_paged_search_reports_total_and_string_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/person/search/"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{"corp_party_id": "1234567", "last_nme": "LITTLE"}],
            "total": 21
        })))
        .expect(1)
        .mount(&server)
        .await;

    let query = AdvancedQuery::new()
        .clause("last_nme", "exact", "Little")
        .page(2);
    let results: SearchResults = SearchApi::new(client_for(&server))
        .advanced_search_with(&query)
        .await
        .unwrap()
        .json()
        .unwrap();

    assert_eq!(results.total, Some(21));
    assert_eq!(
        results.results[0].corp_party_id,
        Some(PartyId::Text("1234567".to_string()))
    );
    assert_eq!(results.results[0].row()[11], "1234567");
}

#[tokio::test]
async fn test_person_and_offices_lookups() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/person/77"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "corp_party_id": 77, "last_nme": "LITTLE", "corp_num": "BC0000042"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/person/78"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/person/officesheld/77"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [
                {"CORP_PARTY_ID": 77, "OFFICER_TYP_CD": "DIR", "SHORT_DESC": "Director",
                 "APPOINTMENT_DT": "Mon, 01 Jan 2001 00:00:00 GMT", "ADDR_LINE_1": "1 MAIN ST"},
                {"CORP_PARTY_ID": 77, "OFFICER_TYP_CD": "SEC", "SHORT_DESC": "Secretary",
                 "APPOINTMENT_DT": null, "ADDR_LINE_1": "1 MAIN ST"}
            ]
        })))
        .mount(&server)
        .await;

    let lookup = LookupApi::new(client_for(&server));

    let person = lookup.person(77).await.unwrap().unwrap();
    assert_eq!(person["last_nme"], "LITTLE");
    assert_eq!(lookup.person(78).await.unwrap(), None);

    let offices = lookup.offices_held(77).await.unwrap();
    let codes: Vec<_> = offices
        .results
        .iter()
        .map(|o| o.officer_typ_cd.as_deref().unwrap_or_default())
        .collect();
    assert_eq!(codes, ["DIR", "SEC"]);
    assert_eq!(offices.results[1].appointment_dt, None);
}

#[tokio::test]
async fn test_corporation_lookup_and_search() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/corporation/BC0000042"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "corp_num": "BC0000042", "corp_typ_cd": "BC"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/corporation/search/"))
        .and(query_param("query", "Sky Blue"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{"corp_num": "BC0000042", "corp_nme": "SKY BLUE LTD.", "state_typ_cd": "ACT"}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/corporation/search/"))
        .and(query_param("query", ""))
        .respond_with(ResponseTemplate::new(400).set_body_string("No search query was received"))
        .mount(&server)
        .await;

    let lookup = LookupApi::new(client_for(&server));

    let corp = lookup.corporation("BC0000042").await.unwrap().unwrap();
    assert_eq!(corp["corp_typ_cd"], "BC");

    let found = lookup.corporation_search("Sky Blue", Some(3)).await.unwrap();
    assert_eq!(found.results.len(), 1);
    assert_eq!(found.results[0].corp_nme.as_deref(), Some("SKY BLUE LTD."));

    let err = lookup.corporation_search("", None).await.unwrap_err();
    assert_eq!(err.status_code(), Some(400));
    assert_eq!(categorize_http_error(&err), ErrorType::HttpRequestBadRequest);
}
