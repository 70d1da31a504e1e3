//! The `private` namespace: calls to private contracts.

use crate::{ApiModule, ApiNamespace};
use ethdoc_types::{from_decimal, MethodDescriptor, Param, ReturnShape, TypeTag};
use serde_json::json;

/// Builds the `private` module.
pub fn module() -> ApiModule {
    ApiModule::new(ApiNamespace::Private).with_methods(vec![
        MethodDescriptor::new(
            "sendTransaction",
            "Make an onchain call to the private contract in order to modify its state.",
        )
        .with_param(
            Param::new(TypeTag::Data, "Signed regular transaction (in hex)").with_example(json!(
                "0xf8840180830e57e094cd96d189596c690ff983e4e14d1838d0305186dc80a4bc64b76d2a0000000000000000000000000000000000000000000000000000000000000045a00b3aa43f869f087a3aec97ba4232b15f9f0ab964c17953ca556b944e424d1f84a058d6edf93ad3c2bb0f0513e9ef391bbe8f7400668aaa51344ee4bf1a587e0218"
            )),
        )
        .returns(
            ReturnShape::new(
                TypeTag::PrivateTransactionResponse,
                "Response object desribing the result of the call",
            )
            .with_example(json!({
                "transactionHash": "0x63c715e88f7291e66069302f6fcbb4f28a19ef5d7cbd1832d0c01e221c0061c6",
                "contractAddress": "0xa94f5374fce5edbc8e2a8697c15331677e6ebf0b",
                "status": from_decimal(0)
            })),
        ),
        MethodDescriptor::new(
            "call",
            "Make an local call to the private contract (without its state modification).",
        )
        .with_param(
            Param::new(
                TypeTag::BlockNumber,
                "integer block number, or the string `'latest'`, `'earliest'`, see the [default block parameter](#the-default-block-parameter).",
            )
            .format("inputDefaultBlockNumberFormatter")
            .with_example(from_decimal(2)),
        )
        .with_param(
            Param::new(TypeTag::TransactionRequest, "The transaction object corresponding to the call")
                .with_example(json!({
                    "from": "0x407d73d8a49eeb85d32cf465507dd71d507100c1",
                    "to": "0xa94f5374fce5edbc8e2a8697c15331677e6ebf0b",
                    "data": "0x41cd5add4fd13aedd64521e363ea279923575ff39718065d38bd46f0e6632e8e"
                })),
        )
        .returns(
            ReturnShape::new(TypeTag::Data, "Result of the call").with_example(json!(
                "0x62e05075829655752e146a129a044ad72e95ce33e48ff48118b697e15e7b41e4"
            )),
        ),
    ])
}
