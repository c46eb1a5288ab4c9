/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// binds names in the environment, applies and curries functions, and
/// produces results.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles closures, currying, scoping and `return`.
/// - Reports runtime errors such as type mismatches or unbound names.
pub mod evaluator;
/// The environment module holds name bindings.
///
/// Environments are chains of scopes shared between the evaluator and the
/// closures it creates.
pub mod environment;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, strings, operators, delimiters, keywords and comments.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, literal text
///   and source position.
/// - Marks unrecognized input as `ILLEGAL` tokens instead of failing.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of the program.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Collects syntax errors with their position and keeps going, so one pass
///   reports every independent mistake.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements truthiness, identity and the inspection form of values.
pub mod value;
