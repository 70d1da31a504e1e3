//! The `eth` namespace: chain state, filters, mining and signing.

use crate::{ApiModule, ApiNamespace};
use ethdoc_types::{from_decimal, Example, Field, MethodDescriptor, Param, ReturnShape, TypeTag};
use serde_json::json;

/// Sub-document holding the pub-sub methods.
pub const SUBDOC_PUBSUB: &str = "pubsub";

const PREAMBLE: &str = r#"
## The default block parameter

The following methods have an optional extra `defaultBlock` parameter:

- [eth_estimateGas](#eth_estimategas)
- [eth_getBalance](#eth_getbalance)
- [eth_getCode](#eth_getcode)
- [eth_getTransactionCount](#eth_gettransactioncount)
- [eth_getStorageAt](#eth_getstorageat)
- [eth_call](#eth_call)

When requests are made that act on the state of Ethereum, the last parameter determines the height of the block.

The following options are possible for the `defaultBlock` parameter:

- `Quantity`/`Integer` - an integer block number;
- `String "earliest"` - for the earliest/genesis block;
- `String "latest"` - for the latest mined block;
- `String "pending"` - for the pending state/transactions.
"#;

/// Builds the `eth` module.
pub fn module() -> ApiModule {
    ApiModule::new(ApiNamespace::Eth).with_preamble(PREAMBLE).with_methods(vec![
        MethodDescriptor::new("accounts", "Returns a list of addresses owned by client.").returns(
            ReturnShape::new(TypeTag::Array, "20 Bytes - addresses owned by the client.")
                .with_example(json!(["0x407d73d8a49eeb85d32cf465507dd71d507100c1"])),
        ),
        MethodDescriptor::new("blockNumber", "Returns the number of most recent block.").returns(
            ReturnShape::new(TypeTag::Quantity, "integer of the current block number the client is on.")
                .with_example(from_decimal(1207)),
        ),
        MethodDescriptor::new(
            "call",
            "Executes a new message call immediately without creating a transaction on the block chain.",
        )
        .with_param(
            Param::new(TypeTag::CallRequest, "The transaction call object.")
                .format("inputCallFormatter")
                .with_example(json!({
                    "from": "0x407d73d8a49eeb85d32cf465507dd71d507100c1",
                    "to": "0xa94f5374fce5edbc8e2a8697c15331677e6ebf0b",
                    "value": from_decimal(100000)
                })),
        )
        .with_param(default_block_param(
            "Integer block number, or the string `'latest'`, `'earliest'` or `'pending'`, see the [default block parameter](#the-default-block-parameter).",
        ))
        .returns(
            ReturnShape::new(TypeTag::Data, "the return value of executed contract.")
                .with_example(json!("0x")),
        ),
        MethodDescriptor::new("coinbase", "Returns the client coinbase address.").returns(
            ReturnShape::new(TypeTag::Address, "The current coinbase address.")
                .with_example(json!("0x407d73d8a49eeb85d32cf465507dd71d507100c1")),
        ),
        MethodDescriptor::new(
            "estimateGas",
            "Makes a call or transaction, which won't be added to the blockchain and returns the used gas, which can be used for estimating the used gas.",
        )
        .with_param(
            Param::new(
                TypeTag::CallRequest,
                "Same as [eth_call](#eth_call) parameters, except that all properties are optional.",
            )
            .format("inputCallFormatter")
            .with_example(Example::literal("{ ... }")),
        )
        .with_param(default_block_param(
            "Integer block number, or the string `'latest'`, `'earliest'` or `'pending'`, see the [default block parameter](#the-default-block-parameter).",
        ))
        .returns(
            ReturnShape::new(TypeTag::Quantity, "The amount of gas used.")
                .format("utils.toDecimal")
                .with_example(from_decimal(21000)),
        ),
        nodoc_stub("fetchQueuedTransactions"),
        nodoc_stub("flush"),
        MethodDescriptor::new("gasPrice", "Returns the current price per gas in wei.").returns(
            ReturnShape::new(TypeTag::Quantity, "integer of the current gas price in wei.")
                .with_example(from_decimal(10000000000000)),
        ),
        MethodDescriptor::new("getBalance", "Returns the balance of the account of given address.")
            .with_param(
                Param::new(TypeTag::Address, "20 Bytes - address to check for balance.")
                    .format("inputAddressFormatter")
                    .with_example(json!("0x407d73d8a49eeb85d32cf465507dd71d507100c1")),
            )
            .with_param(default_block_param(
                "integer block number, or the string `'latest'`, `'earliest'` or `'pending'`, see the [default block parameter](#the-default-block-parameter).",
            ))
            .returns(
                ReturnShape::new(TypeTag::Quantity, "integer of the current balance in wei.")
                    .format("outputBigNumberFormatter")
                    .with_example(json!("0x0234c8a3397aab58")),
            ),
        MethodDescriptor::new("getBlockByHash", "Returns information about a block by hash.")
            .with_param(Param::new(TypeTag::Hash, "Hash of a block.").with_example(json!(
                "0xe670ec64341771606e55d6b4ca35a1a6b75ee3d5145a99d05921026d1527331"
            )))
            .with_param(
                Param::new(
                    TypeTag::Bool,
                    "If `true` it returns the full transaction objects, if `false` only the hashes of the transactions.",
                )
                .with_example(json!(true)),
            )
            .returns(
                ReturnShape::new(TypeTag::Object, "A block object, or `null` when no block was found.")
                    .with_fields(block_fields())
                    .with_example(block_example()),
            ),
        MethodDescriptor::new("getBlockByNumber", "Returns information about a block by block number.")
            .with_param(
                Param::new(
                    TypeTag::BlockNumber,
                    "integer of a block number, or the string `'earliest'`, `'latest'` or `'pending'`, as in the [default block parameter](#the-default-block-parameter).",
                )
                .with_example(from_decimal(436)),
            )
            .with_param(
                Param::new(
                    TypeTag::Bool,
                    "If `true` it returns the full transaction objects, if `false` only the hashes of the transactions.",
                )
                .with_example(json!(true)),
            )
            .returns("See [eth_getBlockByHash](#eth_getblockbyhash)"),
        MethodDescriptor::new(
            "getBlockTransactionCountByHash",
            "Returns the number of transactions in a block from a block matching the given block hash.",
        )
        .with_param(Param::new(TypeTag::Hash, "32 Bytes - hash of a block.").with_example(json!(
            "0xb903239f8543d04b5dc1ba6579132b143087c68db1b2168786408fcbce568238"
        )))
        .returns(
            ReturnShape::new(TypeTag::Quantity, "integer of the number of transactions in this block.")
                .with_example(from_decimal(11)),
        ),
        MethodDescriptor::new(
            "getBlockTransactionCountByNumber",
            "Returns the number of transactions in a block from a block matching the given block number.",
        )
        .with_param(
            Param::new(
                TypeTag::BlockNumber,
                "integer of a block number, or the string `'earliest'`, `'latest'` or `'pending'`, as in the [default block parameter](#the-default-block-parameter).",
            )
            .with_example(from_decimal(232)),
        )
        .returns(
            ReturnShape::new(TypeTag::Quantity, "integer of the number of transactions in this block.")
                .with_example(from_decimal(10)),
        ),
        MethodDescriptor::new("getCode", "Returns code at a given address.")
            .with_param(
                Param::new(TypeTag::Address, "20 Bytes - address.")
                    .format("inputAddressFormatter")
                    .with_example(json!("0xa94f5374fce5edbc8e2a8697c15331677e6ebf0b")),
            )
            .with_param(
                Param::new(
                    TypeTag::BlockNumber,
                    "integer block number, or the string `'latest'`, `'earliest'` or `'pending'`, see the [default block parameter](#the-default-block-parameter).",
                )
                .format("inputDefaultBlockNumberFormatter")
                .with_example(from_decimal(2)),
            )
            .returns(
                ReturnShape::new(TypeTag::Data, "the code from the given address.").with_example(
                    json!("0x600160008035811a818181146012578301005b601b6001356025565b8060005260206000f25b600060078202905091905056"),
                ),
            ),
        MethodDescriptor::new(
            "getFilterChanges",
            "Polling method for a filter, which returns an array of logs which occurred since last poll.",
        )
        .with_param(Param::new(TypeTag::Quantity, "The filter id.").with_example(from_decimal(22)))
        .returns(
            ReturnShape::new(
                TypeTag::Array,
                "Array of log objects, or an empty array if nothing has changed since last poll.",
            )
            .with_example(Example::array(vec![
                json!({
                    "logIndex": from_decimal(1),
                    "blockNumber": from_decimal(436),
                    "blockHash": "0x8216c5785ac562ff41e2dcfdf5785ac562ff41e2dcfdf829c5a142f1fccd7d",
                    "transactionHash": "0xdf829c5a142f1fccd7d8216c5785ac562ff41e2dcfdf5785ac562ff41e2dcf",
                    "transactionIndex": from_decimal(0),
                    "address": "0x16c5785ac562ff41e2dcfdf829c5a142f1fccd7d",
                    "data": "0x0000000000000000000000000000000000000000000000000000000000000000",
                    "topics": ["0x59ebeb90bc63057b6515673c3ecf9438e5058bca0f92585014eced636878c9a5"]
                })
                .into(),
                Example::literal("..."),
            ])),
        ),
        nodoc_stub("getFilterChangesEx"),
        MethodDescriptor::new(
            "getFilterLogs",
            "Returns an array of all logs matching filter with given id.",
        )
        .with_param(Param::new(TypeTag::Quantity, "The filter id.").with_example(from_decimal(22)))
        .returns("See [eth_getFilterChanges](#eth_getfilterchanges)"),
        nodoc_stub("getFilterLogsEx"),
        MethodDescriptor::new("getLogs", "Returns an array of all logs matching a given filter object.")
            .with_param(
                Param::new(
                    TypeTag::Object,
                    "The filter object, see [eth_newFilter parameters](#eth_newfilter).",
                )
                .with_example(json!({
                    "topics": ["0x000000000000000000000000a94f5374fce5edbc8e2a8697c15331677e6ebf0b"]
                })),
            )
            .returns("See [eth_getFilterChanges](#eth_getfilterchanges)"),
        nodoc_stub("getLogsEx"),
        MethodDescriptor::new(
            "getStorageAt",
            "Returns the value from a storage position at a given address.",
        )
        .with_param(
            Param::new(TypeTag::Address, "20 Bytes - address of the storage.")
                .with_example(json!("0x407d73d8a49eeb85d32cf465507dd71d507100c1")),
        )
        .with_param(
            Param::new(TypeTag::Quantity, "integer of the position in the storage.")
                .format("utils.toHex")
                .with_example(from_decimal(0)),
        )
        .with_param(
            Param::new(
                TypeTag::BlockNumber,
                "integer block number, or the string `'latest'`, `'earliest'` or `'pending'`, see the [default block parameter](#the-default-block-parameter).",
            )
            .format("inputDefaultBlockNumberFormatter")
            .optional()
            .with_example(from_decimal(2)),
        )
        .returns(
            ReturnShape::new(TypeTag::Data, "the value at this storage position.").with_example(
                json!("0x0000000000000000000000000000000000000000000000000000000000000003"),
            ),
        ),
        MethodDescriptor::new(
            "getTransactionByHash",
            "Returns the information about a transaction requested by transaction hash.",
        )
        .with_param(Param::new(TypeTag::Hash, "32 Bytes - hash of a transaction.").with_example(
            json!("0xb903239f8543d04b5dc1ba6579132b143087c68db1b2168786408fcbce568238"),
        ))
        .returns(
            ReturnShape::new(TypeTag::Object, "A transaction object, or `null` when no transaction was found:")
                .format("outputTransactionFormatter")
                .with_fields(transaction_fields())
                .with_example(transaction_example()),
        ),
        MethodDescriptor::new(
            "getTransactionByBlockHashAndIndex",
            "Returns information about a transaction by block hash and transaction index position.",
        )
        .with_param(Param::new(TypeTag::Hash, "hash of a block.").with_example(json!(
            "0xe670ec64341771606e55d6b4ca35a1a6b75ee3d5145a99d05921026d1527331"
        )))
        .with_param(
            Param::new(TypeTag::Quantity, "integer of the transaction index position.")
                .with_example(from_decimal(0)),
        )
        .returns("See [eth_getBlockByHash](#eth_gettransactionbyhash)"),
        MethodDescriptor::new(
            "getTransactionByBlockNumberAndIndex",
            "Returns information about a transaction by block number and transaction index position.",
        )
        .with_param(
            Param::new(
                TypeTag::BlockNumber,
                "a block number, or the string `'earliest'`, `'latest'` or `'pending'`, as in the [default block parameter](#the-default-block-parameter).",
            )
            .with_example(from_decimal(668)),
        )
        .with_param(
            Param::new(TypeTag::Quantity, "The transaction index position.")
                .with_example(from_decimal(0)),
        )
        .returns("See [eth_getBlockByHash](#eth_gettransactionbyhash)"),
        MethodDescriptor::new(
            "getTransactionCount",
            "Returns the number of transactions *sent* from an address.",
        )
        .with_param(
            Param::new(TypeTag::Address, "20 Bytes - address.")
                .with_example(json!("0x407d73d8a49eeb85d32cf465507dd71d507100c1")),
        )
        .with_param(default_block_param(
            "integer block number, or the string `'latest'`, `'earliest'` or `'pending'`, see the [default block parameter](#the-default-block-parameter).",
        ))
        .returns(
            ReturnShape::new(
                TypeTag::Quantity,
                "integer of the number of transactions send from this address.",
            )
            .format("utils.toDecimal")
            .with_example(from_decimal(1)),
        ),
        MethodDescriptor::new(
            "getTransactionReceipt",
            "Returns the receipt of a transaction by transaction hash.\n\n**Note** That the receipt is available even for pending transactions.",
        )
        .with_param(Param::new(TypeTag::Hash, "hash of a transaction.").with_example(json!(
            "0x444172bef57ad978655171a8af2cfd89baa02a97fcb773067aef7794d6913374"
        )))
        .returns(
            ReturnShape::new(
                TypeTag::Object,
                "A transaction receipt object, or `null` when no receipt was found:",
            )
            .format("outputTransactionReceiptFormatter")
            .with_fields(receipt_fields())
            .with_example(receipt_example()),
        ),
        MethodDescriptor::new(
            "getUncleByBlockHashAndIndex",
            "Returns information about a uncle of a block by hash and uncle index position.\n\n**Note:** An uncle doesn't contain individual transactions.",
        )
        .with_param(Param::new(TypeTag::Hash, "Hash of a block.").with_example(json!(
            "0xc6ef2fc5426d6ad6fd9e2a26abeab0aa2411b7ab17f30a99d3cb96aed1d1055b"
        )))
        .with_param(
            Param::new(TypeTag::Quantity, "The uncle's index position.")
                .with_example(from_decimal(0)),
        )
        .returns("See [eth_getBlockByHash](#eth_getblockbyhash)"),
        MethodDescriptor::new(
            "getUncleByBlockNumberAndIndex",
            "Returns information about a uncle of a block by number and uncle index position.\n\n**Note:** An uncle doesn't contain individual transactions.",
        )
        .with_param(
            Param::new(
                TypeTag::BlockNumber,
                "a block number, or the string `'earliest'`, `'latest'` or `'pending'`, as in the [default block parameter](#the-default-block-parameter).",
            )
            .with_example(from_decimal(668)),
        )
        .with_param(
            Param::new(TypeTag::Quantity, "The uncle's index position.")
                .with_example(from_decimal(0)),
        )
        .returns("See [eth_getBlockByHash](#eth_getblockbyhash)"),
        MethodDescriptor::new(
            "getUncleCountByBlockHash",
            "Returns the number of uncles in a block from a block matching the given block hash.",
        )
        .with_param(Param::new(TypeTag::Hash, "32 Bytes - hash of a block.").with_example(json!(
            "0xb903239f8543d04b5dc1ba6579132b143087c68db1b2168786408fcbce568238"
        )))
        .returns(
            ReturnShape::new(TypeTag::Quantity, "integer of the number of uncles in this block.")
                .with_example(from_decimal(0)),
        ),
        MethodDescriptor::new(
            "getUncleCountByBlockNumber",
            "Returns the number of uncles in a block from a block matching the given block number.",
        )
        .with_param(
            Param::new(
                TypeTag::BlockNumber,
                "integer of a block number, or the string 'latest', 'earliest' or 'pending', see the [default block parameter](#the-default-block-parameter).",
            )
            .with_example(from_decimal(232)),
        )
        .returns(
            ReturnShape::new(TypeTag::Quantity, "integer of the number of uncles in this block.")
                .with_example(from_decimal(1)),
        ),
        MethodDescriptor::new(
            "getWork",
            "Returns the hash of the current block, the seedHash, and the boundary condition to be met (\"target\").",
        )
        .returns(
            ReturnShape::new(
                TypeTag::Array,
                "Array with the following properties:\n  - `Data`, 32 Bytes - current block header pow-hash.\n  - `Data`, 32 Bytes - the seed hash used for the DAG.\n  - `Data`, 32 Bytes - the boundary condition (\"target\"), 2^256 / difficulty.\n  - `Quantity`, the current block number.",
            )
            .with_example(json!([
                "0x1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
                "0x5EED00000000000000000000000000005EED0000000000000000000000000000",
                "0xd1ff1c01710000000000000000000000d1ff1c01710000000000000000000000",
                from_decimal(1)
            ])),
        ),
        MethodDescriptor::new(
            "hashrate",
            "Returns the number of hashes per second that the node is mining with.",
        )
        .returns(
            ReturnShape::new(TypeTag::Quantity, "number of hashes per second.")
                .with_example(from_decimal(906)),
        ),
        nodoc_stub("inspectTransaction"),
        MethodDescriptor::new("mining", "Returns `true` if client is actively mining new blocks.")
            .returns(
                ReturnShape::new(TypeTag::Bool, "`true` of the client is mining, otherwise `false`.")
                    .with_example(json!(true)),
            ),
        MethodDescriptor::new(
            "newBlockFilter",
            "Creates a filter in the node, to notify when a new block arrives.\nTo check if the state has changed, call [eth_getFilterChanges](#eth_getfilterchanges).",
        )
        .returns(
            ReturnShape::new(TypeTag::Quantity, "A filter id.").with_example(from_decimal(1)),
        ),
        MethodDescriptor::new(
            "newFilter",
            r#"Creates a filter object, based on filter options, to notify when the state changes (logs).
To check if the state has changed, call [eth_getFilterChanges](#eth_getfilterchanges).

##### A note on specifying topic filters:
Topics are order-dependent. A transaction with a log with topics [A, B] will be matched by the following topic filters:
* `[]` "anything"
* `[A]` "A in first position (and anything after)"
* `[null, B]` "anything in first position AND B in second position (and anything after)"
* `[A, B]` "A in first position AND B in second position (and anything after)"
* `[[A, B], [A, B]]` "(A OR B) in first position AND (A OR B) in second position (and anything after)""#,
        )
        .with_param(
            Param::new(TypeTag::Object, "The filter options:")
                .with_fields(vec![
                    Field::new(
                        "fromBlock",
                        TypeTag::BlockNumber,
                        "Integer block number, or `'latest'` for the last mined block or `'pending'`, `'earliest'` for not yet mined transactions.",
                    )
                    .optional()
                    .with_default(json!("latest")),
                    Field::new(
                        "toBlock",
                        TypeTag::BlockNumber,
                        "Integer block number, or `'latest'` for the last mined block or `'pending'`, `'earliest'` for not yet mined transactions.",
                    )
                    .optional()
                    .with_default(json!("latest")),
                    Field::new(
                        "address",
                        TypeTag::Address,
                        "20 Bytes - Contract address or a list of addresses from which logs should originate.",
                    )
                    .optional(),
                    Field::new(
                        "topics",
                        TypeTag::Array,
                        "Array of 32 Bytes `Data` topics. Topics are order-dependent. It's possible to pass in `null` to match any topic, or a subarray of multiple topics of which one should be matching.",
                    )
                    .optional(),
                    Field::new(
                        "limit",
                        TypeTag::Quantity,
                        "The maximum number of entries to retrieve (latest first).",
                    )
                    .optional(),
                ])
                .with_example(Example::object(vec![
                    ("fromBlock", from_decimal(1).into()),
                    ("toBlock", from_decimal(2).into()),
                    ("address", json!("0x8888f1f195afa192cfee860698584c030f4c9db1").into()),
                    (
                        "topics",
                        Example::commented(
                            Example::array(vec![
                                Example::commented(
                                    json!("0x000000000000000000000000a94f5374fce5edbc8e2a8697c15331677e6ebf0b"),
                                    "This topic in first position",
                                ),
                                Example::commented(json!(null), "Any topic in second position"),
                                Example::commented(
                                    json!([
                                        "0x000000000000000000000000a94f5374fce5edbc8e2a8697c15331677e6ebf0b",
                                        "0x000000000000000000000000aff3454fce5edbc8cca8697c15331677e6ebccc"
                                    ]),
                                    "Either topic of the two in third position",
                                ),
                            ]),
                            "... and anything after",
                        ),
                    ),
                ])),
        )
        .returns(
            ReturnShape::new(TypeTag::Quantity, "The filter id.").with_example(from_decimal(1)),
        ),
        nodoc_stub("newFilterEx"),
        MethodDescriptor::new(
            "newPendingTransactionFilter",
            "Creates a filter in the node, to notify when new pending transactions arrive.\n\nTo check if the state has changed, call [eth_getFilterChanges](#eth_getfilterchanges).",
        )
        .returns(
            ReturnShape::new(TypeTag::Quantity, "A filter id.").with_example(from_decimal(1)),
        ),
        nodoc_stub("notePassword"),
        nodoc_stub("pendingTransactions"),
        MethodDescriptor::new("protocolVersion", "Returns the current ethereum protocol version.")
            .returns(
                ReturnShape::new(TypeTag::String, "The current ethereum protocol version.")
                    .with_example(from_decimal(99)),
            ),
        nodoc_stub("register"),
        MethodDescriptor::new(
            "sendRawTransaction",
            "Creates new message call transaction or a contract creation for signed transactions.\n\n**Note:** `eth_submitTransaction` is an alias of this method.",
        )
        .with_param(Param::new(TypeTag::Data, "The signed transaction data.").with_example(json!(
            "0xd46e8dd67c5d32be8d46e8dd67c5d32be8058bb8eb970870f072445675058bb8eb970870f072445675"
        )))
        .returns(
            ReturnShape::new(
                TypeTag::Hash,
                "32 Bytes - the transaction hash, or the zero hash if the transaction is not yet available\n\nUse [eth_getTransactionReceipt](#eth_gettransactionreceipt) to get the contract address, after the transaction was mined, when you created a contract.",
            )
            .with_example(json!("0xe670ec64341771606e55d6b4ca35a1a6b75ee3d5145a99d05921026d1527331")),
        ),
        MethodDescriptor::new(
            "sendTransaction",
            "Creates new message call transaction or a contract creation, if the data field contains code.",
        )
        .with_param(
            Param::new(TypeTag::TransactionRequest, "The transaction object.")
                .format("inputTransactionFormatter")
                .with_example(json!({
                    "from": "0xb60e8dd61c5d32be8058bb8eb970870f07233155",
                    "to": "0xd46e8dd67c5d32be8058bb8eb970870f07244567",
                    "gas": from_decimal(30400),
                    "gasPrice": from_decimal(10000000000000),
                    "value": from_decimal(2441406250),
                    "data": "0xd46e8dd67c5d32be8d46e8dd67c5d32be8058bb8eb970870f072445675058bb8eb970870f072445675"
                })),
        )
        .returns(
            ReturnShape::new(
                TypeTag::Hash,
                "32 Bytes - the transaction hash, or the zero hash if the transaction is not yet available.\n\nUse [eth_getTransactionReceipt](#eth_gettransactionreceipt) to get the contract address, after the transaction was mined, when you created a contract.",
            )
            .with_example(json!("0xe670ec64341771606e55d6b4ca35a1a6b75ee3d5145a99d05921026d1527331")),
        ),
        MethodDescriptor::new(
            "sign",
            "The sign method calculates an Ethereum specific signature with: `sign(keccak256(\"\\x19Ethereum Signed Message:\\n\" + len(message) + message)))`.",
        )
        .with_param(
            Param::new(TypeTag::Address, "20 Bytes - address.")
                .format("inputAddressFormatter")
                .with_example(json!("0xcd2a3d9f938e13cd947ec05abc7fe734df8dd826")),
        )
        .with_param(
            Param::new(TypeTag::Data, "Data which hash to sign.")
                .with_example(Example::commented(json!("0x5363686f6f6c627573"), "Schoolbus")),
        )
        .returns(ReturnShape::new(TypeTag::Data, "Signed data.").with_example(json!(
            "0xb1092cb5b23c2aa55e5b5787729c6be812509376de99a52bea2b41e5a5f8601c5641e74d01e4493c17bf1ef8b179c49362b2c721222128d58422a539310c6ecd1b"
        ))),
        MethodDescriptor::new(
            "signTransaction",
            "Signs transactions without dispatching it to the network. It can be later submitted using [eth_sendRawTransaction](#eth_sendrawtransaction).",
        )
        .with_param(
            Param::new(
                TypeTag::TransactionRequest,
                "Transaction object, see [eth_sendTransaction](#eth_sendTransaction).",
            )
            .format("inputCallFormatter")
            .with_example(Example::literal("{ ... }")),
        )
        .returns(
            ReturnShape::new(TypeTag::Object, "Signed transaction and it's details:")
                .with_fields(vec![
                    Field::new("raw", TypeTag::Data, "The signed, RLP encoded transaction."),
                    Field::new("tx", TypeTag::Object, "Transaction object:")
                        .with_fields(transaction_fields()),
                ])
                .with_example(Example::object(vec![
                    (
                        "raw",
                        json!("0xd46e8dd67c5d32be8d46e8dd67c5d32be8058bb8eb970870f072445675058bb8eb970870f072445675")
                            .into(),
                    ),
                    ("tx", transaction_example()),
                ])),
        ),
        MethodDescriptor::new("submitWork", "Used for submitting a proof-of-work solution.")
            .with_param(
                Param::new(TypeTag::Data, "8 Bytes - The nonce found (64 bits).")
                    .with_example(json!("0x0000000000000001")),
            )
            .with_param(
                Param::new(TypeTag::Data, "32 Bytes - The header's pow-hash (256 bits)")
                    .with_example(json!("0x1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef")),
            )
            .with_param(
                Param::new(TypeTag::Data, "32 Bytes - The mix digest (256 bits).")
                    .with_example(json!("0xD1FE5700000000000000000000000000D1FE5700000000000000000000000000")),
            )
            .returns(
                ReturnShape::new(
                    TypeTag::Bool,
                    "`true` if the provided solution is valid, otherwise `false`.",
                )
                .with_example(json!(true)),
            ),
        MethodDescriptor::new("submitHashrate", "Used for submitting mining hashrate.")
            .with_param(
                Param::new(
                    TypeTag::Data,
                    "a hexadecimal string representation (32 bytes) of the hash rate.",
                )
                .with_example(json!("0x0000000000000000000000000000000000000000000000000000000000500000")),
            )
            .with_param(
                Param::new(TypeTag::Data, "A random hexadecimal(32 bytes) ID identifying the client.")
                    .with_example(json!("0x59daa26581d0acd1fce254fb7e85952f4c09d0915afd33d3886cd914bc7d283c")),
            )
            .returns(
                ReturnShape::new(
                    TypeTag::Bool,
                    "`true` if submitting went through succesfully and `false` otherwise.",
                )
                .with_example(json!(true)),
            ),
        MethodDescriptor::new("syncing", "Returns an object with data about the sync status or `false`.")
            .returns(
                ReturnShape::new(
                    TypeTag::Object,
                    "An object with sync status data or `FALSE`, when not syncing.",
                )
                .format("outputSyncingFormatter")
                .with_fields(sync_status_fields())
                .with_example(Example::commented(
                    json!({
                        "startingBlock": from_decimal(900),
                        "currentBlock": from_decimal(902),
                        "highestBlock": from_decimal(1108)
                    }),
                    "Or `false` when not syncing",
                )),
            ),
        MethodDescriptor::new(
            "uninstallFilter",
            "Uninstalls a filter with given id. Should always be called when watch is no longer needed.\nAdditonally Filters timeout when they aren't requested with [eth_getFilterChanges](#eth_getfilterchanges) for a period of time.",
        )
        .with_param(Param::new(TypeTag::Quantity, "The filter id.").with_example(from_decimal(11)))
        .returns(
            ReturnShape::new(
                TypeTag::Bool,
                "`true` if the filter was successfully uninstalled, otherwise `false`.",
            )
            .with_example(json!(true)),
        ),
        nodoc_stub("unregister"),
        MethodDescriptor::new("subscribe", SUBSCRIBE_DESC)
            .in_subdoc(SUBDOC_PUBSUB)
            .pubsub()
            .with_param(
                Param::new(TypeTag::String, "Subscription type: one of `newHeads`, `logs`")
                    .with_example(json!("logs")),
            )
            .with_param(
                Param::new(
                    TypeTag::Object,
                    "Subscription type-specific parameters. It must be left empty for `newHeads` and must contain filter object for `logs`.",
                )
                .with_example(json!({
                    "fromBlock": "latest",
                    "toBlock": "latest"
                })),
            )
            .returns(
                ReturnShape::new(TypeTag::String, "Assigned subscription ID")
                    .with_example(json!("0xb53c4832f1dca4a5")),
            ),
        MethodDescriptor::new("unsubscribe", "Unsubscribes from a subscription.")
            .in_subdoc(SUBDOC_PUBSUB)
            .pubsub()
            .with_param(
                Param::new(TypeTag::String, "Subscription ID")
                    .with_example(json!("0xb53c4832f1dca4a5un")),
            )
            .returns(
                ReturnShape::new(TypeTag::Bool, "whether the call was successful")
                    .with_example(json!(true)),
            ),
    ])
}

const SUBSCRIBE_DESC: &str = r#"
Starts a subscription (on WebSockets / IPC / TCP transports) to a particular event. For every event that
matches the subscription a JSON-RPC notification with event details and subscription ID will be sent to a client.

Below examples use `wscat`, a simple command line WebSockets client. Find out how to install and use it by visiting [wscat GitHub repository](https://github.com/websockets/wscat).

An example notification received by subscribing to `newHeads` event:
```js
{
    "jsonrpc": "2.0",
    "method": "eth_subscription",
    "params": {
        "result": {
            "author": "0xea674fdde714fd979de3edf0f56aa9716b898ec8",
            "difficulty": "0xb33e1bf54955f",
            "extraData": "0x65746865726d696e652d6177732d61736961312d32",
            "gasLimit": "0x7a121d",
            "gasUsed": "0x79c602",
            "hash": "0x86436b61e0f54c404fff92909d1d2f881a476f0982ff6fc5b3141c90226d6ad1",
            "logsBloom": "0x5a4380886d4448b03805022082080d920020c0010c0d004010c70d0d80a8d56a187cb81800004004099032e042426b2007c2c10244300ab822b84204486008d010188c44808c005f00d2c9eb620c1081601861039129202884a14200410606000420002066b240500042a44002000d18008e021a0a0d04800008201f10002ca52029c104202310405591e500008a5008812290101083101c00428005002c03130a1e0402407260180644140618c08080832c5d89000080914228844180392c020c1058c3040c21220510010023202c040c4082c442e818022145a02a4208200101d48955099089bec4c08080c006831440200300000108cf8a00440520800390",
            "miner": "0xea674fdde714fd979de3edf0f56aa9716b898ec8",
            "mixHash": "0x084b405b7d0ff080c1fbf23ab27a4431aaf9c986c1bd959695993d957eaf81f7",
            "nonce": "0xa527ccd80dd16040",
            "number": "0x5682c7",
            "parentHash": "0xc8e5713f1d7136f02062e840f825f033af00e2adfac1b6dd7c71d146fcd60d4a",
            "receiptsRoot": "0x4852c35a8adb6720e380d8c79a2bb9050fa131b0b53194f56a61982fe6db1059",
            "sealFields": ["0x084b405b7d0ff080c1fbf23ab27a4431aaf9c986c1bd959695993d957eaf81f7", "0xa527ccd80dd16040"],
            "sha3Uncles": "0x1dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347",
            "size": "0x219",
            "stateRoot": "0xf4fee9cf65ed10b1020810c305023dc51e4db4dbdcc9c8f3ae2b6e9334c07087",
            "timestamp": "0x5b06e6c8",
            "transactionsRoot": "0xbc3af100baf8e088f703a1d357375c34e1f0b69176550e10240cc71e702b09ab"
        },
        "subscription": "0xb53c4832f1dca4a5"
    }
}
```

You can unsubscribe using `eth_unsubscribe` RPC method. Subscriptions are also tied to a transport
connection, disconnecting causes all subscriptions to be canceled.
"#;

fn nodoc_stub(name: &'static str) -> MethodDescriptor {
    MethodDescriptor::new(name, "?")
        .returns(ReturnShape::new(TypeTag::Bool, "whether the call was successful"))
        .nodoc("Not implemented by the client")
}

fn default_block_param(desc: &'static str) -> Param {
    Param::new(TypeTag::BlockNumber, desc).format("inputDefaultBlockNumberFormatter").optional()
}

fn block_fields() -> Vec<Field> {
    vec![
        Field::new("number", TypeTag::Quantity, "The block number. `null` when its pending block"),
        Field::new("hash", TypeTag::Hash, "32 Bytes - hash of the block. `null` when its pending block"),
        Field::new("parentHash", TypeTag::Hash, "32 Bytes - hash of the parent block"),
        Field::new(
            "nonce",
            TypeTag::Data,
            "8 Bytes - hash of the generated proof-of-work. `null` when its pending block",
        ),
        Field::new("sha3Uncles", TypeTag::Data, "32 Bytes - SHA3 of the uncles data in the block"),
        Field::new(
            "logsBloom",
            TypeTag::Data,
            "256 Bytes - the bloom filter for the logs of the block. `null` when its pending block",
        ),
        Field::new(
            "transactionsRoot",
            TypeTag::Data,
            "32 Bytes - the root of the transaction trie of the block",
        ),
        Field::new("stateRoot", TypeTag::Data, "32 Bytes - the root of the final state trie of the block"),
        Field::new("receiptsRoot", TypeTag::Data, "32 Bytes - the root of the receipts trie of the block"),
        Field::new(
            "author",
            TypeTag::Address,
            "20 Bytes - the address of the author of the block (the beneficiary to whom the mining rewards were given)",
        ),
        Field::new("miner", TypeTag::Address, "20 Bytes - alias of 'author'"),
        Field::new("difficulty", TypeTag::Quantity, "integer of the difficulty for this block"),
        Field::new(
            "totalDifficulty",
            TypeTag::Quantity,
            "integer of the total difficulty of the chain until this block",
        ),
        Field::new("extraData", TypeTag::Data, "the 'extra data' field of this block"),
        Field::new("size", TypeTag::Quantity, "integer the size of this block in bytes"),
        Field::new("gasLimit", TypeTag::Quantity, "the maximum gas allowed in this block"),
        Field::new("gasUsed", TypeTag::Quantity, "the total used gas by all transactions in this block"),
        Field::new(
            "timestamp",
            TypeTag::Quantity,
            "the unix timestamp for when the block was collated",
        ),
        Field::new(
            "transactions",
            TypeTag::Array,
            "Array of transaction objects, or 32 Bytes transaction hashes depending on the last given parameter",
        ),
        Field::new("uncles", TypeTag::Array, "Array of uncle hashes"),
    ]
}

fn block_example() -> Example {
    Example::object(vec![
        ("number", from_decimal(436).into()),
        ("hash", json!("0xe670ec64341771606e55d6b4ca35a1a6b75ee3d5145a99d05921026d1527331").into()),
        (
            "parentHash",
            json!("0x9646252be9520f6e71339a8df9c55e4d7619deeb018d2a3f2d21fc165dde5eb5").into(),
        ),
        (
            "sealFields",
            json!([
                "0xe04d296d2460cfb8472af2c5fd05b5a214109c25688d3704aed5484f9a7792f2",
                "0x0000000000000042"
            ])
            .into(),
        ),
        (
            "sha3Uncles",
            json!("0x1dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347").into(),
        ),
        (
            "logsBloom",
            json!("0xe670ec64341771606e55d6b4ca35a1a6b75ee3d5145a99d05921026d1527331").into(),
        ),
        (
            "transactionsRoot",
            json!("0x56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421").into(),
        ),
        (
            "stateRoot",
            json!("0xd5855eb08b3387c0af375e9cdb6acfc05eb8f519e419b874b6ff2ffda7ed1dff").into(),
        ),
        ("miner", json!("0x4e65fda2159562a496f9f3522f89122a3088497a").into()),
        ("difficulty", from_decimal(163591).into()),
        ("totalDifficulty", from_decimal(163591).into()),
        (
            "extraData",
            json!("0x0000000000000000000000000000000000000000000000000000000000000000").into(),
        ),
        ("size", from_decimal(163591).into()),
        ("gasLimit", from_decimal(653145).into()),
        ("minGasPrice", from_decimal(653145).into()),
        ("gasUsed", from_decimal(653145).into()),
        ("timestamp", from_decimal(1424182926).into()),
        ("transactions", Example::array(vec![Example::literal("{ ... }, { ... }, ...")])),
        ("uncles", json!(["0x1606e5...", "0xd5145a9..."]).into()),
    ])
}

fn transaction_fields() -> Vec<Field> {
    vec![
        Field::new("hash", TypeTag::Hash, "32 Bytes - hash of the transaction."),
        Field::new(
            "nonce",
            TypeTag::Quantity,
            "the number of transactions made by the sender prior to this one.",
        ),
        Field::new(
            "blockHash",
            TypeTag::Hash,
            "32 Bytes - hash of the block where this transaction was in. `null` when its pending.",
        ),
        Field::new(
            "blockNumber",
            TypeTag::BlockNumber,
            "block number where this transaction was in. `null` when its pending.",
        ),
        Field::new(
            "transactionIndex",
            TypeTag::Quantity,
            "integer of the transactions index position in the block. `null` when its pending.",
        ),
        Field::new("from", TypeTag::Address, "20 Bytes - address of the sender."),
        Field::new(
            "to",
            TypeTag::Address,
            "20 Bytes - address of the receiver. `null` when its a contract creation transaction.",
        ),
        Field::new("value", TypeTag::Quantity, "value transferred in Wei."),
        Field::new("gasPrice", TypeTag::Quantity, "gas price provided by the sender in Wei."),
        Field::new("gas", TypeTag::Quantity, "gas provided by the sender."),
        Field::new("input", TypeTag::Data, "the data send along with the transaction."),
        Field::new("v", TypeTag::Quantity, "the standardised V field of the signature."),
        Field::new(
            "standard_v",
            TypeTag::Quantity,
            "the standardised V field of the signature (0 or 1).",
        ),
        Field::new("r", TypeTag::Quantity, "the R field of the signature."),
        Field::new("raw", TypeTag::Data, "raw transaction data"),
        Field::new("publicKey", TypeTag::Hash, "public key of the signer."),
        Field::new("chainId", TypeTag::Quantity, "the chain id of the transaction, if any."),
        Field::new("creates", TypeTag::Hash, "creates contract hash"),
        Field::new(
            "condition",
            TypeTag::Object,
            "conditional submission, Block number in `block` or timestamp in `time` or `null`. (client feature)",
        )
        .optional(),
    ]
}

fn transaction_example() -> Example {
    Example::from(json!({
        "hash": "0xc6ef2fc5426d6ad6fd9e2a26abeab0aa2411b7ab17f30a99d3cb96aed1d1055b",
        "nonce": from_decimal(0),
        "blockHash": "0xbeab0aa2411b7ab17f30a99d3cb9c6ef2fc5426d6ad6fd9e2a26a6aed1d1055b",
        "blockNumber": from_decimal(5599),
        "transactionIndex": from_decimal(1),
        "from": "0x407d73d8a49eeb85d32cf465507dd71d507100c1",
        "to": "0x853f43d8a49eeb85d32cf465507dd71d507100c1",
        "value": from_decimal(520464),
        "gas": from_decimal(520464),
        "gasPrice": "0x09184e72a000",
        "input": "0x603880600c6000396000f300603880600c6000396000f3603880600c6000396000f360"
    }))
}

fn receipt_fields() -> Vec<Field> {
    vec![
        Field::new(
            "blockHash",
            TypeTag::Hash,
            "32 Bytes - hash of the block where this transaction was in.",
        ),
        Field::new("blockNumber", TypeTag::BlockNumber, "block number where this transaction was in."),
        Field::new(
            "contractAddress",
            TypeTag::Address,
            "20 Bytes - The contract address created, if the transaction was a contract creation, otherwise `null`.",
        ),
        Field::new(
            "cumulativeGasUsed",
            TypeTag::Quantity,
            "The total amount of gas used when this transaction was executed in the block.",
        ),
        Field::new("from", TypeTag::Address, "20 Bytes - The address of the sender."),
        Field::new(
            "to",
            TypeTag::Address,
            "20 Bytes - The address of the receiver. null when it's a contract creation transaction.",
        ),
        Field::new(
            "gasUsed",
            TypeTag::Quantity,
            "The amount of gas used by this specific transaction alone.",
        ),
        Field::new("logs", TypeTag::Array, "Array of log objects, which this transaction generated."),
        Field::new(
            "logsBloom",
            TypeTag::Hash,
            "256 Bytes - A bloom filter of logs/events generated by contracts during transaction execution. Used to efficiently rule out transactions without expected logs.",
        ),
        Field::new(
            "root",
            TypeTag::Hash,
            "32 Bytes - Merkle root of the state trie after the transaction has been executed (optional after Byzantium hard fork [EIP609](https://github.com/ethereum/EIPs/blob/master/EIPS/eip-609.md))",
        ),
        Field::new(
            "status",
            TypeTag::Quantity,
            "`0x0` indicates transaction failure , `0x1` indicates transaction success. Set for blocks mined after Byzantium hard fork [EIP609](https://github.com/ethereum/EIPs/blob/master/EIPS/eip-609.md), `null` before.",
        ),
        Field::new("transactionHash", TypeTag::Hash, "32 Bytes - hash of the transaction."),
        Field::new(
            "transactionIndex",
            TypeTag::Quantity,
            "Integer of the transactions index position in the block.",
        ),
    ]
}

fn receipt_example() -> Example {
    Example::object(vec![
        (
            "blockHash",
            json!("0x67c0303244ae4beeec329e0c66198e8db8938a94d15a366c7514626528abfc8c").into(),
        ),
        ("blockNumber", json!("0x6914b0").into()),
        (
            "contractAddress",
            Example::commented(
                json!("0x471a8bf3fd0dfbe20658a97155388cec674190bf"),
                "or null, if none was created",
            ),
        ),
        ("from", json!("0xc931d93e97ab07fe42d923478ba2465f2").into()),
        (
            "to",
            Example::commented(
                json!(null),
                "value is null because this example transaction is a contract creation",
            ),
        ),
        ("cumulativeGasUsed", json!("0x158e33").into()),
        ("gasUsed", json!("0xba2e6").into()),
        ("logs", Example::commented(json!([]), "logs as returned by eth_getFilterLogs, etc.")),
        (
            "logsBloom",
            json!("0x00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000").into(),
        ),
        ("root", json!(null).into()),
        ("status", json!("0x1").into()),
        (
            "transactionHash",
            json!("0x444172bef57ad978655171a8af2cfd89baa02a97fcb773067aef7794d6913374").into(),
        ),
        ("transactionIndex", json!("0x4").into()),
    ])
}

fn sync_status_fields() -> Vec<Field> {
    vec![
        Field::new(
            "startingBlock",
            TypeTag::Quantity,
            "The block at which the import started (will only be reset, after the sync reached this head)",
        ),
        Field::new("currentBlock", TypeTag::Quantity, "The current block, same as eth_blockNumber"),
        Field::new("highestBlock", TypeTag::Quantity, "The estimated highest block"),
        Field::new(
            "blockGap",
            TypeTag::Array,
            "Array of \"first\", \"last\", such that [first, last) are all missing from the chain",
        ),
        Field::new("warpChunksAmount", TypeTag::Quantity, "Total amount of snapshot chunks"),
        Field::new("warpChunksProcessed", TypeTag::Quantity, "Total amount of snapshot chunks processed"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_count_matches_catalogue() {
        assert_eq!(module().methods.len(), 53);
    }

    #[test]
    fn pubsub_methods_live_in_the_subdoc() {
        let module = module();
        for name in ["subscribe", "unsubscribe"] {
            let method = module.get(name).unwrap();
            assert!(method.pubsub);
            assert_eq!(method.subdoc, Some(SUBDOC_PUBSUB));
        }
    }

    #[test]
    fn undocumented_methods_are_flagged() {
        let module = module();
        let nodoc: Vec<_> =
            module.methods.iter().filter(|m| m.nodoc.is_some()).map(|m| m.name).collect();
        assert_eq!(
            nodoc,
            [
                "fetchQueuedTransactions",
                "flush",
                "getFilterChangesEx",
                "getFilterLogsEx",
                "getLogsEx",
                "inspectTransaction",
                "newFilterEx",
                "notePassword",
                "pendingTransactions",
                "register",
                "unregister"
            ]
        );
    }

    #[test]
    fn default_block_parameter_is_trailing_and_optional() {
        let module = module();
        for name in ["call", "estimateGas", "getBalance", "getTransactionCount"] {
            let method = module.get(name).unwrap();
            let last = method.params.last().unwrap();
            assert_eq!(last.type_tag, TypeTag::BlockNumber, "{name}");
            assert!(last.optional, "{name}");
        }
    }
}
