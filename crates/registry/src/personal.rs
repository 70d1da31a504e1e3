//! The `personal` namespace: account management and signing.

use crate::{ApiModule, ApiNamespace};
use ethdoc_types::{Field, MethodDescriptor, Param, ReturnShape, TypeTag};
use serde_json::json;

/// Builds the `personal` module.
pub fn module() -> ApiModule {
    ApiModule::new(ApiNamespace::Personal).with_methods(vec![
        MethodDescriptor::new(
            "ecRecover",
            "Returns the address associated with the private key that was used to calculate the signature in `personal_sign`.",
        )
        .with_param(Param::new(TypeTag::Data, "The data which hash was signed.").with_example(json!(
            "0xd46e8dd67c5d32be8d46e8dd67c5d32be8058bb8eb970870f072445675058bb8eb970870f072445675"
        )))
        .with_param(Param::new(TypeTag::Data, "Signed data.").with_example(json!(
            "0xe7225f986f192f859a9bf84e34b2b7001dfa11aeb5c7164f81a2bee0d79943e2587be1faa11502eba0f803bb0ee071a082b6fe40fba025f3309263a1eef52c711c"
        )))
        .returns(
            ReturnShape::new(TypeTag::Address, "Address of the signer of the message.")
                .with_example(json!("0xb60e8dd61c5d32be8058bb8eb970870f07233155")),
        ),
        MethodDescriptor::new("listAccounts", "Lists all stored accounts.").returns(
            ReturnShape::new(TypeTag::Array, "A list of 20 byte account identifiers.").with_example(
                json!([
                    "0x7bf87721a96849d168de02fd6ea5986a3a147383",
                    "0xca807a90fd64deed760fb98bf0869b475c469348"
                ]),
            ),
        ),
        MethodDescriptor::new(
            "newAccount",
            "Creates new account.\n\n**Note:** it becomes the new current unlocked account. There can only be one unlocked account at a time.",
        )
        .with_param(
            Param::new(TypeTag::String, "Password for the new account.").with_example(json!("hunter2")),
        )
        .returns(
            ReturnShape::new(TypeTag::Address, "20 Bytes - The identifier of the new account.")
                .with_example(json!("0x8f0227d45853a50eefd48dd4fec25d5b3fd2295e")),
        ),
        MethodDescriptor::new(
            "sendTransaction",
            "Sends transaction and signs it in a single call. The account does not need to be unlocked to make this call, and will not be left unlocked after.",
        )
        .with_param(
            Param::new(TypeTag::TransactionRequest, "The transaction object").with_example(json!({
                "from": "0x407d73d8a49eeb85d32cf465507dd71d507100c1",
                "to": "0xa94f5374fce5edbc8e2a8697c15331677e6ebf0b",
                "data": "0x41cd5add4fd13aedd64521e363ea279923575ff39718065d38bd46f0e6632e8e",
                "value": "0x186a0"
            })),
        )
        .with_param(
            Param::new(TypeTag::String, "Passphrase to unlock the `from` account.")
                .with_example(json!("hunter2")),
        )
        .returns(
            ReturnShape::new(
                TypeTag::Data,
                "32 Bytes - the transaction hash, or the zero hash if the transaction is not yet available",
            )
            .with_example(json!("0x62e05075829655752e146a129a044ad72e95ce33e48ff48118b697e15e7b41e4")),
        ),
        MethodDescriptor::new(
            "signTransaction",
            "Signs a transaction without dispatching it to the network. It can later be submitted using `eth_sendRawTransaction`. The account does not need to be unlocked to make this call, and will not be left unlocked after.",
        )
        .with_param(
            Param::new(TypeTag::TransactionRequest, "The transaction object").with_example(json!({
                "from": "0x407d73d8a49eeb85d32cf465507dd71d507100c1",
                "to": "0xa94f5374fce5edbc8e2a8697c15331677e6ebf0b",
                "data": "0x41cd5add4fd13aedd64521e363ea279923575ff39718065d38bd46f0e6632e8e",
                "value": "0x186a0"
            })),
        )
        .with_param(
            Param::new(TypeTag::String, "Passphrase to unlock the `from` account.")
                .with_example(json!("hunter2")),
        )
        .returns(
            ReturnShape::new(TypeTag::Object, "Signed transaction and its details:")
                .with_fields(vec![
                    Field::new("raw", TypeTag::Data, "The signed, RLP encoded transaction."),
                    Field::new("tx", TypeTag::TransactionRequest, "Transaction object."),
                ])
                .with_example(json!({
                    "raw": "0xd46e8dd67c5d32be8d46e8dd67c5d32be8058bb8eb970870f072445675058bb8eb970870f072445675",
                    "tx": {
                        "hash": "0xc6ef2fc5426d6ad6fd9e2a26abeab0aa2411b7ab17f30a99d3cb96aed1d1055b",
                        "nonce": "0x0",
                        "blockHash": "0xbeab0aa2411b7ab17f30a99d3cb9c6ef2fc5426d6ad6fd9e2a26a6aed1d1055b",
                        "blockNumber": "0x15df",
                        "transactionIndex": "0x1",
                        "from": "0x407d73d8a49eeb85d32cf465507dd71d507100c1",
                        "to": "0x853f43d8a49eeb85d32cf465507dd71d507100c1",
                        "value": "0x7f110",
                        "gas": "0x7f110",
                        "gasPrice": "0x09184e72a000",
                        "input": "0x603880600c6000396000f300603880600c6000396000f3603880600c6000396000f360"
                    }
                })),
        ),
        MethodDescriptor::new(
            "sign",
            "Calculates an Ethereum specific signature with: `sign(keccak256(\"Ethereum Signed Message: \" + len(message) + message)))`.",
        )
        .with_param(Param::new(TypeTag::Data, "The data to sign").with_example(json!(
            "0xd46e8dd67c5d32be8d46e8dd67c5d32be8058bb8eb970870f072445675058bb8eb970870f072445675"
        )))
        .with_param(
            Param::new(TypeTag::Address, "20 Bytes - The address of the account to sign with")
                .with_example(json!("0xb60e8dd61c5d32be8058bb8eb970870f07233155")),
        )
        .with_param(
            Param::new(TypeTag::String, "Passphrase to unlock the `from` account.")
                .with_example(json!("hunter")),
        )
        .returns(ReturnShape::new(TypeTag::Data, "Signed data.").with_example(json!(
            "0xe7225f986f192f859a9bf84e34b2b7001dfa11aeb5c7164f81a2bee0d79943e2587be1faa11502eba0f803bb0ee071a082b6fe40fba025f3309263a1eef52c711c"
        ))),
        MethodDescriptor::new("signTypedData", "Hashes and signs typed structured data")
            .with_param(
                Param::new(TypeTag::Eip712, "EIP-712 compliant data structure to be signed")
                    .with_example(json!({
                        "types": {
                            "EIP712Domain": [
                                { "name": "name", "type": "string" },
                                { "name": "version", "type": "string" },
                                { "name": "chainId", "type": "uint256" },
                                { "name": "verifyingContract", "type": "address" }
                            ],
                            "Person": [
                                { "name": "name", "type": "string" },
                                { "name": "wallet", "type": "address" }
                            ],
                            "Mail": [
                                { "name": "from", "type": "Person" },
                                { "name": "to", "type": "Person" },
                                { "name": "contents", "type": "string" }
                            ]
                        },
                        "primaryType": "Mail",
                        "domain": {
                            "name": "Ether Mail",
                            "version": "1",
                            "chainId": 1,
                            "verifyingContract": "0xCcCCccccCCCCcCCCCCCcCcCccCcCCCcCcccccccC"
                        },
                        "message": {
                            "from": {
                                "name": "Cow",
                                "wallet": "0xCD2a3d9F938E13CD947Ec05AbC7FE734Df8DD826"
                            },
                            "to": {
                                "name": "Bob",
                                "wallet": "0xbBbBBBBbbBBBbbbBbbBbbbbBBbBbbbbBbBbbBBbB"
                            },
                            "contents": "Hello, Bob!"
                        }
                    })),
            )
            .with_param(
                Param::new(TypeTag::Address, "20 Bytes - The address of the account to sign with")
                    .with_example(json!("0xb60e8dd61c5d32be8058bb8eb970870f07233155")),
            )
            .with_param(
                Param::new(TypeTag::String, "The account password").with_example(json!("password")),
            )
            .returns(ReturnShape::new(TypeTag::Data, "Signed data.").with_example(json!(
                "0xe7225f986f192f859a9bf84e34b2b7001dfa11aeb5c7164f81a2bee0d79943e2587be1faa11502eba0f803bb0ee071a082b6fe40fba025f3309263a1eef52c711c"
            ))),
        MethodDescriptor::new(
            "sign191",
            "EIP-191 compliant signing, allows signing of different data formats depending on the version specifier",
        )
        .with_param(Param::new(TypeTag::String, "EIP-191 version specifier").with_example(json!(
            "0x00 for pre-signed transactions, 0x01 for structured data(EIP712), 0x45 for personal messages"
        )))
        .with_param(
            Param::new(
                TypeTag::Eip191,
                "data to be signed, depending on the version specified in the first argument",
            )
            .with_example(json!("`PresignedTransaction` or `EIP712` or `Data`")),
        )
        .with_param(
            Param::new(TypeTag::Address, "20 Bytes - The address of the account to sign with")
                .with_example(json!("0xb60e8dd61c5d32be8058bb8eb970870f07233155")),
        )
        .with_param(
            Param::new(TypeTag::String, "The account password").with_example(json!("password")),
        )
        .returns(ReturnShape::new(TypeTag::Data, "Signed data.").with_example(json!(
            "0xe7225f986f192f859a9bf84e34b2b7001dfa11aeb5c7164f81a2bee0d79943e2587be1faa11502eba0f803bb0ee071a082b6fe40fba025f3309263a1eef52c711c"
        ))),
        MethodDescriptor::new(
            "unlockAccount",
            "Unlocks specified account for use.\n\nIf permanent unlocking is disabled (the default) then the duration argument will be ignored, and the account will be unlocked for a single signing. With permanent locking enabled, the duration sets the number of seconds to hold the account open for. It will default to 300 seconds. Passing 0 unlocks the account indefinitely.\n\nThere can only be one unlocked account at a time.",
        )
        .with_param(
            Param::new(TypeTag::Address, "20 Bytes - The address of the account to unlock.")
                .with_example(json!("0x8f0227d45853a50eefd48dd4fec25d5b3fd2295e")),
        )
        .with_param(
            Param::new(TypeTag::String, "Passphrase to unlock the account.")
                .with_example(json!("hunter2")),
        )
        .with_param(
            Param::new(
                TypeTag::Quantity,
                "Integer or `null` - Duration in seconds how long the account should remain unlocked for.",
            )
            .with_default(json!(300))
            .with_example(json!(null)),
        )
        .returns(
            ReturnShape::new(TypeTag::Bool, "whether the call was successful")
                .with_example(json!(true)),
        ),
    ])
}
