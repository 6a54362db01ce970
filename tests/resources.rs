//! Request and response shaping for every resource, against a scripted
//! transport.

mod common;

use common::mock_client;
use serde_json::json;

use lnd_rest_sdk::http::{BodyMode, Method, Operation, TransportFailure};
use lnd_rest_sdk::prelude::*;

// ── Info ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_info() {
    let (client, mock) = mock_client();
    mock.respond_json(
        200,
        json!({
            "identity_pubkey": "02aa",
            "alias": "alice",
            "block_height": 812000,
            "synced_to_chain": true,
            "chains": [{"chain": "bitcoin", "network": "regtest"}],
            "num_peers": 2
        }),
    );

    let info = client.info().get().await.unwrap();
    assert_eq!(info.identity_pubkey, "02aa");
    assert_eq!(info.alias, "alice");
    assert_eq!(info.network(), Some("regtest"));

    let req = mock.last_request();
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.path_and_query(), "/v1/getinfo");
    assert!(req.body.is_none());
}

#[tokio::test]
async fn test_info_without_pubkey_is_malformed() {
    let (client, mock) = mock_client();
    mock.respond_json(200, json!({"alias": "alice"}));

    let err = client.info().get().await.unwrap_err();
    match err {
        LndError::MalformedResponse { operation, .. } => assert_eq!(operation, Operation::GetInfo),
        other => panic!("expected malformed response, got {other:?}"),
    }
}

#[tokio::test]
async fn test_repeated_reads_send_identical_requests() {
    let (client, mock) = mock_client();
    // Every read decodes `{}` as an empty result.
    for _ in 0..12 {
        mock.respond_json(200, json!({}));
    }

    for _ in 0..2 {
        client.channels().list().await.unwrap();
        client.invoices().list().await.unwrap();
        client.payments().list().await.unwrap();
        client.peers().list().await.unwrap();
        client.wallet().balance().await.unwrap();
        client.wallet().transactions().await.unwrap();
    }

    let requests = mock.requests();
    assert_eq!(requests.len(), 12);
    let (first, second) = requests.split_at(6);
    for (a, b) in first.iter().zip(second) {
        assert_eq!(a.operation, b.operation);
        assert_eq!(a.framing(), b.framing(), "{}", a.operation);
    }
}

// ── Channels ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_channels() {
    let (client, mock) = mock_client();
    mock.respond_json(
        200,
        json!({"channels": [{
            "active": true,
            "remote_pubkey": "03bb",
            "channel_point": "9f2c:0",
            "chan_id": "7",
            "capacity": "1000000",
            "local_balance": "400000",
            "remote_balance": "600000"
        }]}),
    );

    let channels = client.channels().list().await.unwrap();
    assert_eq!(channels.len(), 1);
    assert_eq!(channels[0].channel_point, ChannelPoint::new("9f2c", 0));
    assert_eq!(channels[0].capacity, 1_000_000);
    assert_eq!(mock.last_request().path_and_query(), "/v1/channels");
}

#[tokio::test]
async fn test_open_channel_body_and_point() {
    let (client, mock) = mock_client();
    mock.respond_json(200, json!({"funding_txid_bytes": "AAEC/w==", "output_index": 1}));

    let point = client
        .channels()
        .open(OpenChannelRequest::new("03bb", 100_000))
        .await
        .unwrap();
    assert_eq!(point.to_string(), "ff020100:1");

    let req = mock.last_request();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.path, "/v1/channels");
    assert_eq!(
        req.body,
        Some(json!({"node_pubkey_string": "03bb", "local_funding_amount": "100000"}))
    );
}

#[tokio::test]
async fn test_open_channel_zero_amount_not_sent() {
    let (client, mock) = mock_client();
    let err = client
        .channels()
        .open(OpenChannelRequest::new("03bb", 0))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_close_channel_decomposes_point() {
    let (client, mock) = mock_client();
    mock.respond_json(
        200,
        json!({"result": {"close_pending": {"txid": "AAEC/w==", "output_index": 0}}}),
    );

    let ack = client.channels().close(CloseChannelRequest::new("a1b2c3:1")).await.unwrap();
    assert_eq!(ack.closing_txid.as_deref(), Some("ff020100"));
    assert!(!ack.confirmed);

    let req = mock.last_request();
    assert_eq!(req.method, Method::Delete);
    assert_eq!(req.path_and_query(), "/v1/channels/a1b2c3/1?force=false");
    assert_eq!(req.body_mode, BodyMode::FirstMessage);
    assert!(req.body.is_none());
}

#[tokio::test]
async fn test_force_close_sets_flag() {
    let (client, mock) = mock_client();
    mock.respond_json(200, json!({"result": {}}));

    client.channels().close(CloseChannelRequest::new("a1b2c3:0").force(true)).await.unwrap();
    assert_eq!(
        mock.last_request().path_and_query(),
        "/v1/channels/a1b2c3/0?force=true"
    );
}

#[tokio::test]
async fn test_close_with_bad_point_sends_nothing() {
    let (client, mock) = mock_client();
    for bad in ["a1b2c3", "a1:b2:3", ":1", "a1b2c3:x"] {
        let err = client.channels().close(CloseChannelRequest::new(bad)).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRequest, "{bad}");
    }
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_close_stream_error_is_node_error() {
    let (client, mock) = mock_client();
    mock.respond_json(
        200,
        json!({"error": {"code": 2, "message": "channel not found", "details": []}}),
    );

    let err = client.channels().close(CloseChannelRequest::new("a1b2c3:1")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Node);
    assert_eq!(err.node_message(), Some("channel not found"));
}

// ── Invoices ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_add_then_lookup_invoice() {
    let (client, mock) = mock_client();
    mock.respond_json(
        200,
        json!({"r_hash": "AAEC/w==", "payment_request": "lnbcrt10u1", "add_index": "3"}),
    );
    mock.respond_json(
        200,
        json!({
            "memo": "coffee",
            "r_hash": "AAEC/w==",
            "payment_request": "lnbcrt10u1",
            "value": "1000",
            "settled": false,
            "state": "OPEN",
            "add_index": "3"
        }),
    );

    let added = client
        .invoices()
        .add(AddInvoiceRequest::new(1000).memo("coffee"))
        .await
        .unwrap();
    assert_eq!(added.payment_hash, "000102ff");

    let add_req = mock.last_request();
    assert_eq!(add_req.path, "/v1/invoices");
    assert_eq!(add_req.body, Some(json!({"value": "1000", "memo": "coffee"})));

    let found = client.invoices().lookup(&added.payment_hash).await.unwrap();
    assert_eq!(mock.last_request().path, "/v1/invoice/000102ff");
    assert_eq!(found.value, 1000);
    assert_eq!(found.payment_request, added.payment_request);
    assert_eq!(found.state, InvoiceState::Open);
}

#[tokio::test]
async fn test_zero_amount_invoice_allowed() {
    let (client, mock) = mock_client();
    mock.respond_json(200, json!({"r_hash": "AAEC/w==", "payment_request": "lnbcrt1"}));

    let invoice = client.invoices().add(AddInvoiceRequest::new(0)).await.unwrap();
    assert_eq!(invoice.value, 0);
    assert_eq!(mock.last_request().body, Some(json!({"value": "0"})));
}

#[tokio::test]
async fn test_add_invoice_without_hash_is_malformed() {
    let (client, mock) = mock_client();
    mock.respond_json(200, json!({"r_hash": "", "payment_request": "lnbcrt10u1"}));

    let err = client.invoices().add(AddInvoiceRequest::new(1000)).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedResponse);
}

#[tokio::test]
async fn test_add_invoice_expiry_out_of_range_not_sent() {
    let (client, mock) = mock_client();
    let err = client
        .invoices()
        .add(AddInvoiceRequest::new(1000).expiry(u64::MAX))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_lookup_unknown_hash_is_not_found() {
    let (client, mock) = mock_client();
    mock.respond_json(404, json!({"code": 5, "message": "unable to locate invoice"}));

    let err = client.invoices().lookup("00ff").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.node_message(), Some("unable to locate invoice"));
}

#[tokio::test]
async fn test_lookup_empty_hash_rejected() {
    let (client, mock) = mock_client();
    let err = client.invoices().lookup("").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    assert!(mock.requests().is_empty());
}

// ── Payments ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_pay_always_sends_fee_limit() {
    let (client, mock) = mock_client();
    mock.respond_json(
        200,
        json!({
            "payment_error": "",
            "payment_preimage": "AAEC/w==",
            "payment_hash": "/wIBAA==",
            "payment_route": {"total_fees": "1", "total_amt": "1001"}
        }),
    );

    let payment = client
        .payments()
        .pay("lnbcrt10u1", FeeLimit::Fixed(1000))
        .await
        .unwrap();
    assert_eq!(payment.status, PaymentStatus::Succeeded);
    assert_eq!(payment.fee, 1);

    let req = mock.last_request();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.path, "/v1/channels/transactions");
    assert_eq!(
        req.body,
        Some(json!({"payment_request": "lnbcrt10u1", "fee_limit": {"fixed": "1000"}}))
    );
}

#[tokio::test]
async fn test_payment_error_is_payment_failed() {
    let (client, mock) = mock_client();
    mock.respond_json(
        200,
        json!({"payment_error": "invoice expired", "payment_hash": "/wIBAA=="}),
    );

    let err = client
        .payments()
        .pay("lnbcrt10u1", FeeLimit::Percent(1))
        .await
        .unwrap_err();
    assert!(matches!(err, LndError::PaymentFailed { .. }));
    assert_eq!(err.node_message(), Some("invoice expired"));
}

#[tokio::test]
async fn test_list_payments() {
    let (client, mock) = mock_client();
    mock.respond_json(
        200,
        json!({"payments": [{
            "payment_hash": "ab12",
            "value_sat": "1000",
            "fee_sat": "1",
            "status": "SUCCEEDED",
            "payment_request": "lnbcrt10u1"
        }]}),
    );

    let payments = client.payments().list().await.unwrap();
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].status, PaymentStatus::Succeeded);
    assert_eq!(payments[0].fee_limit, None);
    assert_eq!(mock.last_request().path, "/v1/payments");
}

// ── Peers ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_connect_peer_body() {
    let (client, mock) = mock_client();
    mock.respond_json(200, json!({}));

    client
        .peers()
        .connect(ConnectPeerRequest::new("03bb", "10.0.0.2:9735"))
        .await
        .unwrap();

    let req = mock.last_request();
    assert_eq!(req.path, "/v1/peers");
    assert_eq!(
        req.body,
        Some(json!({"addr": {"pubkey": "03bb", "host": "10.0.0.2:9735"}, "perm": false}))
    );
}

#[tokio::test]
async fn test_disconnect_peer_path() {
    let (client, mock) = mock_client();
    mock.respond_raw(200, "");

    let ack = client.peers().disconnect("03bb").await.unwrap();
    assert_eq!(ack, Ack::default());

    let req = mock.last_request();
    assert_eq!(req.method, Method::Delete);
    assert_eq!(req.path, "/v1/peers/03bb");
}

#[tokio::test]
async fn test_list_peers() {
    let (client, mock) = mock_client();
    mock.respond_json(
        200,
        json!({"peers": [{"pub_key": "03bb", "address": "10.0.0.2:9735", "inbound": false}]}),
    );

    let peers = client.peers().list().await.unwrap();
    assert_eq!(peers[0].pubkey, "03bb");
}

// ── Wallet ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_wallet_balance() {
    let (client, mock) = mock_client();
    mock.respond_json(
        200,
        json!({"total_balance": "150000", "confirmed_balance": "100000", "unconfirmed_balance": "50000"}),
    );

    let balance = client.wallet().balance().await.unwrap();
    assert_eq!(balance.total, 150_000);
    assert_eq!(balance.confirmed, 100_000);
    assert_eq!(balance.unconfirmed, 50_000);
    assert_eq!(mock.last_request().path, "/v1/balance/blockchain");
}

#[tokio::test]
async fn test_new_address_type_forwarded() {
    let (client, mock) = mock_client();
    mock.respond_json(200, json!({"address": "2N1first"}));
    mock.respond_json(200, json!({"address": "2N1second"}));

    let first = client
        .wallet()
        .new_address(AddressType::NestedPubkeyHash)
        .await
        .unwrap();
    let second = client
        .wallet()
        .new_address(AddressType::NestedPubkeyHash)
        .await
        .unwrap();
    assert_ne!(first.address, second.address);
    assert_eq!(first.address_type, AddressType::NestedPubkeyHash);

    for req in mock.requests() {
        assert_eq!(req.method, Method::Get);
        assert_eq!(req.path_and_query(), "/v1/newaddress?type=NESTED_PUBKEY_HASH");
    }
}

#[tokio::test]
async fn test_send_coins_body() {
    let (client, mock) = mock_client();
    mock.respond_json(200, json!({"txid": "deadbeef"}));
    mock.respond_json(200, json!({"txid": "cafebabe"}));

    let txid = client
        .wallet()
        .send_coins(SendCoinsRequest::new("bcrt1qxyz", 20_000))
        .await
        .unwrap();
    assert_eq!(txid.as_str(), "deadbeef");
    assert_eq!(
        mock.last_request().body,
        Some(json!({"addr": "bcrt1qxyz", "amount": "20000"}))
    );

    client
        .wallet()
        .send_coins(SendCoinsRequest::new("bcrt1qxyz", 20_000).sat_per_vbyte(5))
        .await
        .unwrap();
    assert_eq!(
        mock.last_request().body,
        Some(json!({"addr": "bcrt1qxyz", "amount": "20000", "sat_per_vbyte": "5"}))
    );
}

#[tokio::test]
async fn test_send_coins_zero_amount_rejected() {
    let (client, mock) = mock_client();
    let err = client
        .wallet()
        .send_coins(SendCoinsRequest::new("bcrt1qxyz", 0))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    assert!(mock.requests().is_empty());
}

// ── Errors ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_insufficient_funds_message_passed_through() {
    let (client, mock) = mock_client();
    mock.respond_json(
        500,
        json!({"code": 2, "message": "insufficient funds available to construct transaction"}),
    );

    let err = client
        .wallet()
        .send_coins(SendCoinsRequest::new("bcrt1qxyz", 10_000_000))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(
        err.node_message(),
        Some("insufficient funds available to construct transaction")
    );
}

#[tokio::test]
async fn test_transport_failure_is_network_error() {
    let (client, mock) = mock_client();
    mock.fail(TransportFailure::new("connection refused"));

    let err = client.info().get().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
    assert!(!err.is_timeout());
}

#[tokio::test]
async fn test_concurrent_calls_share_client() {
    let (client, mock) = mock_client();
    mock.respond_json(200, json!({"total_balance": "1"}));
    mock.respond_json(200, json!({"channels": []}));

    let other = client.clone();
    let wallet = client.wallet();
    let channels = other.channels();
    let (balance, channels) = tokio::join!(wallet.balance(), channels.list());
    // Either response decodes as either shape, so the order of polling
    // does not matter.
    assert!(balance.is_ok());
    assert!(channels.is_ok());
    assert_eq!(mock.requests().len(), 2);
}
