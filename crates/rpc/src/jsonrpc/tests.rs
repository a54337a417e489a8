use crate::{JsonRpc, Error};
use crate::jsonrpc::{Id, Response};

#[test]
fn test_jsonrpc() {
    let id: Id = 1_u32.into();
    let jsonrpc = JsonRpc::format(id, "test", vec![]);
    let json = serde_json::to_string(&jsonrpc).unwrap();
    assert_eq!(json, r#"{"jsonrpc":"2.0","id":1,"method":"test","params":[]}"#);
}

#[test]
fn test_jsonrpc_with_params() {
    let jsonrpc = JsonRpc::format(7_u64, "engine_getPayloadV1", vec![json!("0x0000000000000001")]);
    let json = serde_json::to_string(&jsonrpc).unwrap();
    assert_eq!(
        json,
        r#"{"jsonrpc":"2.0","id":7,"method":"engine_getPayloadV1","params":["0x0000000000000001"]}"#
    );
}

#[test]
fn test_response_result() {
    let response: Response = serde_json::from_str(r#"{"jsonrpc":"2.0","id":1,"result":{"status":"VALID"}}"#).unwrap();
    assert_eq!(response.id, Id::Num(1));
    assert_eq!(response.as_result().unwrap(), Some(json!({"status": "VALID"})));
}

#[test]
fn test_response_null_result() {
    let response: Response = serde_json::from_str(r#"{"jsonrpc":"2.0","id":"a","result":null}"#).unwrap();
    assert_eq!(response.id, Id::Str("a".to_string()));
    assert_eq!(response.as_result().unwrap(), None);
}

#[test]
fn test_response_error() {
    let response: Response = serde_json::from_str(
        r#"{"jsonrpc":"2.0","id":1,"error":{"code":-38001,"message":"Unknown payload"}}"#
    ).unwrap();

    match response.as_result() {
        Err(Error::JsonRpcError(error)) => assert_eq!(error["code"], -38001),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_response_with_result_and_error() {
    let response = Response {
        id: Id::Num(1),
        result: Some(json!("0x")),
        error: Some(json!({"code": -32000})),
    };
    assert!(matches!(response.as_result(), Err(Error::InvalidResponseError)));
}
