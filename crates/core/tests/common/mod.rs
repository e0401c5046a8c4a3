use corvel_jvm_core::provider::CORVEL_MARKER_FIELD;
use ristretto_classfile::{
    ClassAccessFlags, ClassFile, ConstantPool, Field, FieldAccessFlags, FieldType, Version,
};

/// Serialized classfile for the given binary name. When `corvel` is set the
/// class carries the Corvel runtime metadata marker field.
pub fn class_bytes(binary_name: &str, flags: ClassAccessFlags, corvel: bool) -> Vec<u8> {
    let mut constant_pool = ConstantPool::default();
    let this_class = constant_pool.add_class(binary_name).unwrap();

    let mut fields = Vec::new();
    if corvel {
        let name_index = constant_pool.add_utf8(CORVEL_MARKER_FIELD).unwrap();
        let descriptor_index = constant_pool.add_utf8("Ljava/lang/Object;").unwrap();
        fields.push(Field {
            access_flags: FieldAccessFlags::PRIVATE
                | FieldAccessFlags::STATIC
                | FieldAccessFlags::FINAL
                | FieldAccessFlags::SYNTHETIC,
            name_index,
            descriptor_index,
            field_type: FieldType::Object("java/lang/Object".to_string()),
            attributes: vec![],
        });
    }

    let class_file = ClassFile {
        version: Version::Java21 { minor: 0 },
        constant_pool,
        access_flags: flags,
        this_class,
        fields,
        ..Default::default()
    };

    let mut bytes = Vec::new();
    class_file.to_bytes(&mut bytes).unwrap();
    bytes
}

pub fn plain_class_bytes(binary_name: &str) -> Vec<u8> {
    class_bytes(
        binary_name,
        ClassAccessFlags::PUBLIC | ClassAccessFlags::SUPER,
        false,
    )
}
