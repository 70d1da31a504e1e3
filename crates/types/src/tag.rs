//! The type-tag vocabulary.

use crate::Field;
use serde::Serialize;
use serde_json::json;
use strum::{AsRefStr, EnumIter, IntoStaticStr, VariantArray, VariantNames};

/// Marker identifying the semantic shape of a parameter or return value.
///
/// Tags carry no behavior. They exist so the namespace tables reference a
/// fixed vocabulary and the renderer knows what to print for each slot;
/// composite tags additionally expose their members via [`TypeTag::fields`].
/// Because the vocabulary is an enum, a descriptor cannot reference a tag
/// that does not exist.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    IntoStaticStr,
    VariantNames,
    VariantArray,
    EnumIter,
    Serialize,
)]
pub enum TypeTag {
    /// 20 byte hex-encoded account address.
    Address,
    /// Arbitrary hex-encoded bytes.
    Data,
    /// 32 byte hex-encoded hash.
    Hash,
    /// Hex-encoded integer quantity.
    Quantity,
    /// Plain decimal integer.
    Integer,
    /// Floating point number.
    Float,
    /// JSON boolean.
    #[strum(serialize = "Boolean")]
    #[serde(rename = "Boolean")]
    Bool,
    /// JSON string.
    String,
    /// JSON object without a fixed shape.
    Object,
    /// JSON array.
    Array,
    /// Integer block number, or one of the `earliest`/`latest`/`pending` tags.
    BlockNumber,
    /// Message-call request object.
    CallRequest,
    /// Transaction request object.
    TransactionRequest,
    /// Transaction response object.
    TransactionResponse,
    /// Response returned for private contract transactions.
    PrivateTransactionResponse,
    /// Account recovered from a signature.
    RecoveredAccount,
    /// Presigned transaction payload.
    PresignedTransaction,
    /// EIP-712 typed structured data.
    #[strum(serialize = "EIP712")]
    #[serde(rename = "EIP712")]
    Eip712,
    /// EIP-712 signing domain.
    #[strum(serialize = "EIP712Domain")]
    #[serde(rename = "EIP712Domain")]
    Eip712Domain,
    /// EIP-191 versioned signing payload.
    #[strum(serialize = "EIP191")]
    #[serde(rename = "EIP191")]
    Eip191,
}

impl TypeTag {
    /// Canonical label used in rendered documentation.
    pub fn name(&self) -> &'static str {
        (*self).into()
    }

    /// Type string rendered in parameter and return tables.
    ///
    /// Alias tags print the set of shapes they stand for; composite tags
    /// print as objects and expose their members via [`TypeTag::fields`].
    pub fn print(&self) -> &'static str {
        match self {
            TypeTag::Address => "`Address`",
            TypeTag::Data => "`Data`",
            TypeTag::Hash => "`Hash`",
            TypeTag::Quantity => "`Quantity`",
            TypeTag::Integer => "`Integer`",
            TypeTag::Float => "`Float`",
            TypeTag::Bool => "`Boolean`",
            TypeTag::String => "`String`",
            TypeTag::Object => "`Object`",
            TypeTag::Array => "`Array`",
            TypeTag::BlockNumber => "`Quantity` or `Tag`",
            TypeTag::Eip191 => "`EIP712` or `Data` or `PresignedTransaction`",
            TypeTag::CallRequest
            | TypeTag::TransactionRequest
            | TypeTag::TransactionResponse
            | TypeTag::PrivateTransactionResponse
            | TypeTag::RecoveredAccount
            | TypeTag::PresignedTransaction
            | TypeTag::Eip712
            | TypeTag::Eip712Domain => "`Object`",
        }
    }

    /// Member fields of composite tags, `None` for scalar tags.
    pub fn fields(&self) -> Option<Vec<Field>> {
        match self {
            TypeTag::CallRequest => Some(call_request()),
            TypeTag::TransactionRequest => Some(transaction_request()),
            TypeTag::TransactionResponse => Some(transaction_response()),
            TypeTag::PrivateTransactionResponse => Some(private_transaction_response()),
            TypeTag::RecoveredAccount => Some(recovered_account()),
            TypeTag::PresignedTransaction => Some(presigned_transaction()),
            TypeTag::Eip712 => Some(eip712()),
            TypeTag::Eip712Domain => Some(eip712_domain()),
            _ => None,
        }
    }
}

fn call_request() -> Vec<Field> {
    vec![
        Field::new("from", TypeTag::Address, "20 Bytes - The address the transaction is send from.")
            .optional(),
        Field::new(
            "to",
            TypeTag::Address,
            "(optional when creating new contract) 20 Bytes - The address the transaction is directed to.",
        ),
        Field::new(
            "gas",
            TypeTag::Quantity,
            "Integer of the gas provided for the transaction execution. eth_call consumes zero gas, but this parameter may be needed by some executions.",
        )
        .optional(),
        Field::new("gasPrice", TypeTag::Quantity, "Integer of the gas price used for each paid gas.")
            .optional(),
        Field::new("value", TypeTag::Quantity, "Integer of the value sent with this transaction.")
            .optional(),
        Field::new(
            "data",
            TypeTag::Data,
            "4 byte hash of the method signature followed by encoded parameters. For details see [Ethereum Contract ABI](https://github.com/ethereum/wiki/wiki/Ethereum-Contract-ABI).",
        )
        .optional(),
    ]
}

fn transaction_request() -> Vec<Field> {
    vec![
        Field::new("from", TypeTag::Address, "20 Bytes - The address the transaction is send from."),
        Field::new("to", TypeTag::Address, "20 Bytes - The address the transaction is directed to.")
            .optional(),
        Field::new(
            "gas",
            TypeTag::Quantity,
            "Integer of the gas provided for the transaction execution. eth_call consumes zero gas, but this parameter may be needed by some executions.",
        )
        .optional(),
        Field::new("gasPrice", TypeTag::Quantity, "Integer of the gas price used for each paid gas.")
            .optional(),
        Field::new("value", TypeTag::Quantity, "Integer of the value sent with this transaction.")
            .optional(),
        Field::new(
            "data",
            TypeTag::Data,
            "4 byte hash of the method signature followed by encoded parameters. For details see [Ethereum Contract ABI](https://github.com/ethereum/wiki/wiki/Ethereum-Contract-ABI).",
        )
        .optional(),
        Field::new(
            "nonce",
            TypeTag::Quantity,
            "Integer of a nonce. This allows to overwrite your own pending transactions that use the same nonce.",
        )
        .optional(),
        Field::new(
            "condition",
            TypeTag::Object,
            "Conditional submission of the transaction. Can be either an integer block number `{ block: 1 }` or UTC timestamp (in seconds) `{ time: 1491290692 }` or `null`.",
        )
        .optional(),
    ]
}

fn transaction_response() -> Vec<Field> {
    vec![
        Field::new("hash", TypeTag::Hash, "32 Bytes - hash of the transaction."),
        Field::new(
            "nonce",
            TypeTag::Quantity,
            "The number of transactions made by the sender prior to this one.",
        ),
        Field::new(
            "blockHash",
            TypeTag::Hash,
            "32 Bytes - hash of the block where this transaction was in. `null` when its pending.",
        ),
        Field::new(
            "blockNumber",
            TypeTag::BlockNumber,
            "Block number where this transaction was in. `null` when its pending.",
        ),
        Field::new(
            "transactionIndex",
            TypeTag::Quantity,
            "Integer of the transactions index position in the block. `null` when its pending.",
        ),
        Field::new("from", TypeTag::Address, "20 Bytes - address of the sender."),
        Field::new(
            "to",
            TypeTag::Address,
            "20 Bytes - address of the receiver. `null` when its a contract creation transaction.",
        ),
        Field::new("value", TypeTag::Quantity, "Value transferred in Wei."),
        Field::new("gasPrice", TypeTag::Quantity, "Gas price provided by the sender in Wei."),
        Field::new("gas", TypeTag::Quantity, "Gas provided by the sender."),
        Field::new("input", TypeTag::Data, "The data send along with the transaction."),
        Field::new("creates", TypeTag::Address, "Address of a created contract or `null`.").optional(),
        Field::new("raw", TypeTag::Data, "Raw transaction data."),
        Field::new("publicKey", TypeTag::Data, "Public key of the signer."),
        Field::new("chainId", TypeTag::Quantity, "The chain id of the transaction, if any."),
        Field::new(
            "standardV",
            TypeTag::Quantity,
            "The standardized V field of the signature (0 or 1).",
        ),
        Field::new("v", TypeTag::Quantity, "The V field of the signature."),
        Field::new("r", TypeTag::Quantity, "The R field of the signature."),
        Field::new("s", TypeTag::Quantity, "The S field of the signature."),
        Field::new(
            "condition",
            TypeTag::Object,
            "Conditional submission, Block number in `block` or timestamp in `time` or `null`.",
        )
        .optional(),
    ]
}

fn private_transaction_response() -> Vec<Field> {
    vec![
        Field::new("transactionHash", TypeTag::Hash, "32 Bytes - hash of the transaction."),
        Field::new("contractAddress", TypeTag::Address, "20 Bytes - address of the public contract."),
        Field::new("status", TypeTag::Quantity, "Status of the request."),
    ]
}

fn recovered_account() -> Vec<Field> {
    vec![
        Field::new("address", TypeTag::Address, "The address recovered from the signature"),
        Field::new("publicKey", TypeTag::Quantity, "Public key recovered from the signature"),
        Field::new(
            "isValidForCurrentChain",
            TypeTag::Bool,
            "Flag that reports if this signture was produced for the current chain spec",
        ),
    ]
}

fn presigned_transaction() -> Vec<Field> {
    vec![
        Field::new("data", TypeTag::Data, "Presigned Transaction data"),
        Field::new(
            "validator",
            TypeTag::Address,
            "address of the contract that validates the presigned transaction",
        ),
    ]
}

fn eip712() -> Vec<Field> {
    vec![
        Field::new(
            "primaryType",
            TypeTag::String,
            "name of the struct defined in `types` that is the same type as `message`",
        ),
        Field::new("domain", TypeTag::Eip712Domain, "EIP712Domain"),
        Field::new("message", TypeTag::Object, "Structured message to be signed").with_example(json!({
            "from": {
                "name": "Cow",
                "wallet": "0xCD2a3d9F938E13CD947Ec05AbC7FE734Df8DD826"
            },
            "to": {
                "name": "Bob",
                "wallet": "0xbBbBBBBbbBBBbbbBbbBbbbbBBbBbbbbBbBbbBBbB"
            },
            "contents": "Hello, Bob!"
        })),
        Field::new(
            "types",
            TypeTag::Object,
            "type definitions for the EIP712Domain and the primaryType as well as it's dependent types",
        )
        .with_example(json!({
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
        })),
    ]
}

fn eip712_domain() -> Vec<Field> {
    vec![
        Field::new(
            "name",
            TypeTag::String,
            "User readable name of signing domain, i.e. the name of the DApp or the protocol",
        )
        .with_example(json!("Ether Mail")),
        Field::new(
            "verifyingContract",
            TypeTag::Address,
            "Address of the contract that verifies the signed message",
        ),
        Field::new(
            "chainId",
            TypeTag::Integer,
            "chain id this signature is valid for to prevent chain replay attacks",
        ),
        Field::new(
            "version",
            TypeTag::Integer,
            "The current major version of the signing domain. Signatures from different versions are not compatible.",
        ),
        Field::new("salt", TypeTag::Data, "(Optional) should be used as a last resort domain seperator"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn names_follow_doc_labels() {
        assert_eq!(TypeTag::Address.name(), "Address");
        assert_eq!(TypeTag::Bool.name(), "Boolean");
        assert_eq!(TypeTag::Eip712.name(), "EIP712");
        assert_eq!(TypeTag::Eip712Domain.name(), "EIP712Domain");
        assert_eq!(TypeTag::Eip191.name(), "EIP191");
    }

    #[test]
    fn alias_tags_print_their_alternatives() {
        assert_eq!(TypeTag::BlockNumber.print(), "`Quantity` or `Tag`");
        assert_eq!(TypeTag::Eip191.print(), "`EIP712` or `Data` or `PresignedTransaction`");
        assert_eq!(TypeTag::CallRequest.print(), "`Object`");
    }

    #[test]
    fn scalar_tags_print_their_name() {
        for tag in [TypeTag::Address, TypeTag::Data, TypeTag::Hash, TypeTag::Quantity] {
            assert_eq!(tag.print(), format!("`{}`", tag.name()));
        }
    }

    #[test]
    fn composite_tags_expose_fields() {
        let call_request = TypeTag::CallRequest.fields().unwrap();
        assert_eq!(call_request.len(), 6);
        assert!(call_request[0].optional);
        assert_eq!(call_request[0].name, "from");

        let response = TypeTag::TransactionResponse.fields().unwrap();
        assert_eq!(response.len(), 20);
        assert_eq!(response.last().unwrap().name, "condition");
    }

    #[test]
    fn scalar_tags_have_no_fields() {
        for tag in TypeTag::iter() {
            let composite = tag.fields().is_some();
            assert_eq!(composite, tag.print() == "`Object`" && tag != TypeTag::Object, "{tag:?}");
        }
    }

    #[test]
    fn serializes_as_doc_label() {
        assert_eq!(serde_json::to_value(TypeTag::Eip712).unwrap(), "EIP712");
        assert_eq!(serde_json::to_value(TypeTag::Bool).unwrap(), "Boolean");
        assert_eq!(serde_json::to_value(TypeTag::BlockNumber).unwrap(), "BlockNumber");
    }
}
