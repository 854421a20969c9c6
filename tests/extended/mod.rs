pub mod test_relations;
