use super::expressions::{DeclarationExpr, FunctionExpr, IdentifierExpr};

/// Root of the syntax tree: every top-level construct of one parsed module,
/// in source order within each sequence.
#[derive(Debug, Clone, Default)]
pub struct Module {
    pub imports: Vec<Import>,
    pub functions: Vec<FunctionExpr>,
    pub classes: Vec<ClassDecl>,
    pub structs: Vec<StructDecl>,
    pub enums: Vec<EnumDecl>,
    pub variables: Vec<DeclarationExpr>,
}

/// `import a.b.c;`, `include a.b;` or `import a.b as c;`.
#[derive(Debug, Clone)]
pub struct Import {
    pub index: usize,
    pub path: Vec<String>,
    pub is_include: bool,
    pub alias: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ClassDecl {
    pub index: usize,
    pub name: String,
    pub base: Option<IdentifierExpr>,
    pub generics: Vec<String>,
    pub members: Vec<DeclarationExpr>,
    pub methods: Vec<FunctionExpr>,
}

#[derive(Debug, Clone)]
pub struct StructDecl {
    pub index: usize,
    pub name: String,
    pub base: Option<IdentifierExpr>,
    pub members: Vec<DeclarationExpr>,
}

/// An enum declaration. `members` and `values` are parallel: member `i`
/// has value `values[i]`.
#[derive(Debug, Clone)]
pub struct EnumDecl {
    pub index: usize,
    pub name: String,
    pub members: Vec<String>,
    pub values: Vec<u64>,
}

impl EnumDecl {
    pub fn new(index: usize, name: String, members: Vec<String>, values: Vec<u64>) -> Self {
        assert_eq!(
            members.len(),
            values.len(),
            "enum members and values must stay parallel"
        );
        EnumDecl {
            index,
            name,
            members,
            values,
        }
    }
}
